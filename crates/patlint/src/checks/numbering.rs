//! Numeral consistency: one feature, one numeral; one numeral, one feature.

use indexmap::IndexMap;

use crate::diagnostic::Diagnostic;
use crate::extract::extract_feature_number_pairs;

use super::{Check, Context};

/// Detects a feature bound to two different numerals and a numeral reused
/// for two different features.
pub struct NumberingCheck;

impl Check for NumberingCheck {
    fn check(&self, ctx: &Context<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // feature -> most recently seen numeral, in first-seen order.
        let mut bindings: IndexMap<String, String> = IndexMap::new();

        for (idx, line) in ctx.lines.iter().enumerate() {
            for pair in extract_feature_number_pairs(line) {
                // Conflicts always cite the latest prior binding, not the
                // first ever seen.
                if let Some(previous) = bindings.get(&pair.feature) {
                    if previous != &pair.number {
                        diagnostics.push(
                            Diagnostic::new(
                                format!("num-{}-{}", idx, pair.feature),
                                *line,
                                idx + 1,
                                format!(
                                    "技术特征\"{}\"使用了不一致的标号：之前使用\"{}\"，现在使用\"{}\"。",
                                    pair.feature, previous, pair.number
                                ),
                            )
                            .with_suggestion("请统一使用相同的标号表示相同的技术特征。"),
                        );
                    }
                }

                // One reuse diagnostic per new pair: report the first prior
                // feature holding this numeral, then stop scanning.
                for (existing_feature, existing_number) in &bindings {
                    if existing_number == &pair.number && existing_feature != &pair.feature {
                        diagnostics.push(
                            Diagnostic::new(
                                format!("num-{}-{}", idx, pair.number),
                                *line,
                                idx + 1,
                                format!(
                                    "标号\"{}\"被用于不同的技术特征：\"{}\"和\"{}\"。",
                                    pair.number, existing_feature, pair.feature
                                ),
                            )
                            .with_suggestion("请为不同的技术特征使用不同的标号。"),
                        );
                        break;
                    }
                }

                // Last write wins; conflicts are reported, not prevented.
                bindings.insert(pair.feature, pair.number);
            }
        }

        diagnostics
    }
}
