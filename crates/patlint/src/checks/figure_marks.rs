//! Cross-consistency between a figure-mark legend and the body text.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostic::{Diagnostic, Severity};
use crate::document::DocumentType;
use crate::extract::extract_feature_number_pairs;

use super::{Check, Context};

/// Legend line: numeral, separator, feature name. Unparseable lines are
/// silently skipped.
static LEGEND_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)[\s\-：:、.]+([^\d]+)$").unwrap());

struct LegendEntry {
    feature: String,
    /// 1-based legend line the entry was parsed from.
    line: usize,
}

/// Bidirectional index of the body text's feature/numeral bindings.
///
/// Built once per run by a single pass of the extractor over every line;
/// both directions preserve first-seen order.
pub struct BodyIndex {
    features_by_number: IndexMap<String, Vec<String>>,
    numbers_by_feature: IndexMap<String, Vec<String>>,
}

impl BodyIndex {
    /// Index every line of body text.
    pub fn from_lines(lines: &[&str]) -> Self {
        let mut features_by_number: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut numbers_by_feature: IndexMap<String, Vec<String>> = IndexMap::new();

        for line in lines {
            for pair in extract_feature_number_pairs(line) {
                let features = features_by_number.entry(pair.number.clone()).or_default();
                if !features.contains(&pair.feature) {
                    features.push(pair.feature.clone());
                }

                let numbers = numbers_by_feature.entry(pair.feature).or_default();
                if !numbers.contains(&pair.number) {
                    numbers.push(pair.number);
                }
            }
        }

        Self {
            features_by_number,
            numbers_by_feature,
        }
    }

    /// All feature names seen for a numeral, in first-seen order.
    pub fn features_for(&self, number: &str) -> &[String] {
        self.features_by_number
            .get(number)
            .map_or(&[], Vec::as_slice)
    }

    /// All numerals seen for a feature name, in first-seen order.
    pub fn numbers_for(&self, feature: &str) -> &[String] {
        self.numbers_by_feature
            .get(feature)
            .map_or(&[], Vec::as_slice)
    }

    fn numbers(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.features_by_number.iter()
    }

    fn contains_number(&self, number: &str) -> bool {
        self.features_by_number.contains_key(number)
    }
}

/// Cross-references the figure-mark legend against the body text in both
/// directions. A no-op for claims text or a blank legend.
pub struct FigureMarkCheck;

impl Check for FigureMarkCheck {
    fn check(&self, ctx: &Context<'_>) -> Vec<Diagnostic> {
        let legend = match ctx.legend {
            Some(l) if !l.trim().is_empty() => l,
            _ => return Vec::new(),
        };

        // Claims numerals are not cross-checked against a figure legend.
        if ctx.document_type == DocumentType::Claims {
            return Vec::new();
        }

        let legend_map = parse_legend(legend);
        let index = BodyIndex::from_lines(&ctx.lines);

        let mut diagnostics = Vec::new();

        // Legend -> body: unused numerals and diverging feature names.
        for (number, entry) in &legend_map {
            if !index.contains_number(number) {
                diagnostics.push(
                    Diagnostic::new(
                        format!("figmark-missing-{}", number),
                        format!("{} - {}", number, entry.feature),
                        entry.line,
                        format!("附图标记说明中的标号\"{}\"在说明书中未被使用。", number),
                    )
                    .with_suggestion("请检查标号是否正确，或在说明书中添加该标号的引用。")
                    .with_severity(Severity::Warning),
                );
                continue;
            }

            let body_features = index.features_for(number);
            // Whole-string containment in either direction counts as a
            // match; no fuzzy comparison.
            let name_matches = body_features
                .iter()
                .any(|f| f.contains(&entry.feature) || entry.feature.contains(f.as_str()));

            if !name_matches && !body_features.is_empty() {
                diagnostics.push(
                    Diagnostic::new(
                        format!("figmark-mismatch-{}", number),
                        format!("{} - {}", number, entry.feature),
                        entry.line,
                        format!(
                            "附图标记说明中标号\"{}\"对应的技术特征\"{}\"与说明书中的不一致。说明书中使用了: {}",
                            number,
                            entry.feature,
                            body_features.join(", ")
                        ),
                    )
                    .with_suggestion("请统一技术特征的命名，确保附图标记说明与说明书中的描述一致。"),
                );
            }
        }

        // Body -> legend: numerals the legend never lists.
        for (number, features) in index.numbers() {
            if legend_map.contains_key(number) {
                continue;
            }

            diagnostics.push(
                Diagnostic::new(
                    format!("spec-missing-{}", number),
                    format!("说明书中使用了标号\"{}\"({})", number, features.join(", ")),
                    first_body_line_with_number(&ctx.lines, number),
                    format!(
                        "说明书中使用了标号\"{}\"，但在附图标记说明中未找到该标号。",
                        number
                    ),
                )
                .with_suggestion("请在附图标记说明中添加该标号及其对应的技术特征。")
                .with_severity(Severity::Warning),
            );
        }

        diagnostics
    }
}

/// Parse the legend into numeral -> (feature, line). The last occurrence of
/// a numeral wins; its position in the map stays where the numeral first
/// appeared.
fn parse_legend(legend: &str) -> IndexMap<String, LegendEntry> {
    let mut map: IndexMap<String, LegendEntry> = IndexMap::new();

    for (idx, line) in legend.lines().enumerate() {
        if let Some(caps) = LEGEND_LINE.captures(line) {
            map.insert(
                caps[1].to_string(),
                LegendEntry {
                    feature: caps[2].trim().to_string(),
                    line: idx + 1,
                },
            );
        }
    }

    map
}

/// First 1-based body line containing the numeral in either parenthesis
/// form, defaulting to 1.
fn first_body_line_with_number(lines: &[&str], number: &str) -> usize {
    let half = format!("({})", number);
    let full = format!("（{}）", number);

    lines
        .iter()
        .position(|line| line.contains(&half) || line.contains(&full))
        .map_or(1, |idx| idx + 1)
}
