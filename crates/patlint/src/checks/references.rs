//! Reference validity: numerals referenced via 所述 but never defined.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostic::Diagnostic;
use crate::extract::extract_feature_number_pairs;

use super::{Check, Context};

static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// A 所述 ("said ...") demonstrative followed eventually by a digit. Lines
/// without this shape are skipped so incidental numbers (dates, counts) are
/// not flagged.
static DEMONSTRATIVE_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"所述.*?\d").unwrap());

/// Flags numerals that are referenced but never defined as a feature label.
pub struct ReferenceCheck;

impl Check for ReferenceCheck {
    fn check(&self, ctx: &Context<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // Pass 1: every numeral the extractor binds to a feature anywhere in
        // the text counts as defined.
        let mut defined: HashSet<String> = HashSet::new();
        for line in &ctx.lines {
            for pair in extract_feature_number_pairs(line) {
                defined.insert(pair.number);
            }
        }

        let section = ctx.document_type.section_name();

        // Pass 2: raw numeral tokens on demonstrative-reference lines.
        for (idx, line) in ctx.lines.iter().enumerate() {
            if !DEMONSTRATIVE_REFERENCE.is_match(line) {
                continue;
            }

            for token in NUMBER_TOKEN.find_iter(line) {
                let number = token.as_str();
                if defined.contains(number) {
                    continue;
                }

                diagnostics.push(
                    Diagnostic::new(
                        format!("ref-{}-{}", idx, number),
                        *line,
                        idx + 1,
                        format!("引用了标号\"{}\"，但该标号未在{}中定义。", number, section),
                    )
                    .with_suggestion(format!(
                        "请检查标号是否正确，或在{}中添加该标号的定义。",
                        section
                    )),
                );
            }
        }

        diagnostics
    }
}
