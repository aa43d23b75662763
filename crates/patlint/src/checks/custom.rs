//! Evaluation of user-supplied pattern rules.

use regex::Regex;
use tracing::warn;

use crate::diagnostic::Diagnostic;
use crate::rule::CustomRule;

use super::{Check, Context};

enum Matcher {
    Literal(String),
    Pattern(Regex),
}

impl Matcher {
    fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::Literal(pattern) => line.contains(pattern.as_str()),
            Matcher::Pattern(regex) => regex.is_match(line),
        }
    }
}

/// Applies the host's enabled rules line-by-line, in their original order.
pub struct CustomRuleCheck;

impl Check for CustomRuleCheck {
    fn check(&self, ctx: &Context<'_>) -> Vec<Diagnostic> {
        // Compile each enabled rule once up front. A malformed pattern drops
        // that rule for the run and never aborts the batch.
        let mut compiled: Vec<(&CustomRule, Matcher)> = Vec::new();
        for rule in ctx.rules.iter().filter(|r| r.enabled) {
            if rule.is_regex {
                match rule.compiled_pattern() {
                    Ok(regex) => compiled.push((rule, Matcher::Pattern(regex))),
                    Err(error) => {
                        warn!(rule = %rule.name, %error, "skipping rule with invalid pattern");
                    }
                }
            } else {
                compiled.push((rule, Matcher::Literal(rule.pattern.clone())));
            }
        }

        let mut diagnostics = Vec::new();

        // Lines outer, rules inner: a line's diagnostics appear in rule order.
        for (idx, line) in ctx.lines.iter().enumerate() {
            for (rule, matcher) in &compiled {
                if !matcher.matches(line) {
                    continue;
                }

                let mut diag = Diagnostic::new(
                    format!("custom-{}-{}", rule.id, idx),
                    *line,
                    idx + 1,
                    rule.error_message.clone(),
                )
                .with_severity(rule.severity);

                if !rule.suggestion.is_empty() {
                    diag = diag.with_suggestion(rule.suggestion.clone());
                }
                if !rule.category.is_empty() {
                    diag = diag.with_category(rule.category.clone());
                }

                diagnostics.push(diag);
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::document::DocumentType;

    fn run(text: &str, rules: &[CustomRule]) -> Vec<Diagnostic> {
        let ctx = Context::new(text, None, rules, DocumentType::Unknown);
        CustomRuleCheck.check(&ctx)
    }

    #[test]
    fn test_literal_rule_matches_by_substring() {
        let rules = vec![CustomRule::new("r1", "模糊用语", "大约", "不应使用模糊用语。")
            .with_severity(Severity::Warning)
            .with_category("措辞")];
        let diags = run("该部件长度大约为10 mm。\n该部件为金属材质。", &rules);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "custom-r1-0");
        assert_eq!(diags[0].line, 1);
        assert_eq!(diags[0].description, "不应使用模糊用语。");
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].category.as_deref(), Some("措辞"));
    }

    #[test]
    fn test_regex_rule() {
        let rules = vec![CustomRule::new("r2", "夹杂英文", "[a-z]{4,}", "避免夹杂英文单词。").regex()];
        let diags = run("使用bracket固定。", &rules);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "custom-r2-0");
    }

    #[test]
    fn test_disabled_rule_never_fires() {
        let rules = vec![CustomRule::new("r1", "n", "大约", "m").disabled()];
        assert_eq!(run("大约大约大约", &rules), vec![]);
    }

    #[test]
    fn test_invalid_regex_contributes_nothing_and_does_not_abort() {
        let rules = vec![
            CustomRule::new("bad", "坏规则", "([unclosed", "never").regex(),
            CustomRule::new("good", "好规则", "底座", "matched"),
        ];
        let diags = run("底座(1)。", &rules);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "custom-good-0");
    }

    #[test]
    fn test_line_diagnostics_follow_rule_order() {
        let rules = vec![
            CustomRule::new("a", "first", "底座", "first"),
            CustomRule::new("b", "second", "底座", "second"),
        ];
        let diags = run("底座(1)。", &rules);

        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].id, "custom-a-0");
        assert_eq!(diags[1].id, "custom-b-0");
    }

    #[test]
    fn test_empty_suggestion_and_category_are_omitted() {
        let rules = vec![CustomRule::new("r1", "n", "底座", "m")];
        let diags = run("底座", &rules);
        assert_eq!(diags[0].suggestion, None);
        assert_eq!(diags[0].category, None);
    }

    #[test]
    fn test_no_rules_no_diagnostics() {
        assert_eq!(run("任意文本", &[]), vec![]);
    }
}
