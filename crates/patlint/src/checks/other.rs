//! Fixed battery of formatting heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostic::{Diagnostic, Severity};
use crate::document::DocumentType;

use super::{Check, Context};

/// A claims-numbering line: 权利要求 followed by its number.
static CLAIM_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^权利要求\s*\d+").unwrap());

/// Digit immediately followed by an ASCII letter, e.g. "10mm".
static MISSING_UNIT_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+[a-zA-Z]+").unwrap());

/// Line-scoped formatting heuristics; the only cross-line state is a one
/// line look-ahead for the 其特征在于 clause.
pub struct OtherDefectsCheck;

impl Check for OtherDefectsCheck {
    fn check(&self, ctx: &Context<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let is_claims = ctx.document_type == DocumentType::Claims;

        for (idx, line) in ctx.lines.iter().enumerate() {
            if is_claims && CLAIM_HEADING.is_match(line) && !ends_with_colon(line) {
                diagnostics.push(
                    Diagnostic::new(
                        format!("other-{}-claim", idx),
                        *line,
                        idx + 1,
                        "权利要求格式错误，应以冒号结尾。",
                    )
                    .with_suggestion("请在权利要求编号后添加冒号。"),
                );
            }

            if MISSING_UNIT_SPACE.is_match(line) {
                diagnostics.push(
                    Diagnostic::new(
                        format!("other-{}-unit", idx),
                        *line,
                        idx + 1,
                        "数字与单位之间应有空格。",
                    )
                    .with_suggestion("请在数字与单位之间添加空格。"),
                );
            }

            if is_claims && CLAIM_HEADING.is_match(line) && !line.contains("其特征") {
                if let Some(next) = ctx.lines.get(idx + 1) {
                    if !next.contains("其特征在于") {
                        diagnostics.push(
                            Diagnostic::new(
                                format!("other-{}-characteristic", idx),
                                *line,
                                idx + 1,
                                "权利要求中缺少\"其特征在于\"或类似表述。",
                            )
                            .with_suggestion(
                                "请在权利要求中添加\"其特征在于\"或类似表述，以明确限定技术方案。",
                            )
                            .with_severity(Severity::Warning),
                        );
                    }
                }
            }
        }

        // Document-level specification checks, each flagged once.
        if ctx.document_type == DocumentType::Specification && !ctx.lines.is_empty() {
            if !ctx.body.contains("技术领域") {
                diagnostics.push(
                    Diagnostic::new(
                        "other-missing-field",
                        "说明书缺少\"技术领域\"章节",
                        1,
                        "说明书中缺少\"技术领域\"章节。",
                    )
                    .with_suggestion("请在说明书中添加\"技术领域\"章节，描述发明所属的技术领域。")
                    .with_severity(Severity::Warning),
                );
            }

            if !ctx.body.contains("背景技术") {
                diagnostics.push(
                    Diagnostic::new(
                        "other-missing-background",
                        "说明书缺少\"背景技术\"章节",
                        1,
                        "说明书中缺少\"背景技术\"章节。",
                    )
                    .with_suggestion("请在说明书中添加\"背景技术\"章节，描述发明的背景技术。")
                    .with_severity(Severity::Warning),
                );
            }

            if !ctx.body.contains("如图") && !ctx.body.contains("如附图") {
                diagnostics.push(
                    Diagnostic::new("other-missing-figure", "说明书缺少附图说明", 1, "说明书中缺少附图说明。")
                        .with_suggestion("请在说明书中添加附图说明。")
                        .with_severity(Severity::Warning),
                );
            }
        }

        diagnostics
    }
}

fn ends_with_colon(line: &str) -> bool {
    line.ends_with(':') || line.ends_with('：')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, document_type: DocumentType) -> Vec<Diagnostic> {
        let ctx = Context::new(text, None, &[], document_type);
        OtherDefectsCheck.check(&ctx)
    }

    #[test]
    fn test_claim_heading_without_colon() {
        let text = "权利要求1 一种装置，其特征在于包括底座";
        let diags = run(text, DocumentType::Claims);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "other-0-claim");
        assert!(diags[0].description.contains("应以冒号结尾"));
    }

    #[test]
    fn test_full_width_colon_is_accepted() {
        let text = "权利要求1：\n一种装置，其特征在于包括底座。";
        assert_eq!(run(text, DocumentType::Claims), vec![]);
    }

    #[test]
    fn test_claim_heading_is_not_checked_outside_claims() {
        let text = "权利要求1 如图所示的背景技术领域装置";
        assert_eq!(run(text, DocumentType::Specification), vec![]);
    }

    #[test]
    fn test_missing_unit_space() {
        let diags = run("长度为10mm。", DocumentType::Unknown);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "other-0-unit");
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn test_missing_characteristic_clause() {
        let text = "权利要求1:\n一种装置，包括底座。";
        let diags = run(text, DocumentType::Claims);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "other-0-characteristic");
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn test_characteristic_clause_on_next_line_is_fine() {
        let text = "权利要求1:\n一种装置，其特征在于包括底座。";
        assert_eq!(run(text, DocumentType::Claims), vec![]);
    }

    #[test]
    fn test_specification_missing_sections_flagged_once() {
        let text = "本发明涉及机械。\n如图1所示装置运行。\n装置包括底座。";
        let diags = run(text, DocumentType::Specification);

        let ids: Vec<&str> = diags.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["other-missing-field", "other-missing-background"]);
        assert!(diags.iter().all(|d| d.line == 1));
    }

    #[test]
    fn test_specification_missing_figure_reference() {
        let text = "技术领域\n背景技术\n装置包括底座。";
        let diags = run(text, DocumentType::Specification);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].id, "other-missing-figure");
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(run("", DocumentType::Specification), vec![]);
    }
}
