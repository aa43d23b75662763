//! Extraction of (technical feature, numeral label) pairs from patent text.
//!
//! Chinese patent prose labels drawing elements with a parenthesized decimal
//! numeral directly after the feature name, e.g. `固定架(4)` or `连接件（5）`.
//! The extractor finds those labels on a single line and strips the
//! grammatical noise (demonstratives, connectors, relational verb phrases)
//! that precedes the actual feature name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Feature name followed by a parenthesized numeral, half- or full-width.
static PAIR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^()（）]+)[（(](\d+)[)）]").unwrap());

/// Trailing run of non-whitespace, non-punctuation characters. Bounds the
/// candidate feature so unrelated clause text before a separator is dropped.
static TRAILING_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^\s、，,.:：-]+)$").unwrap());

static LEADING_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[、，,.;:：\s-]+").unwrap());

/// The claim-drafting adverb 进一步(地), "further(more)".
static LEADING_ADVERB: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:进一步地|进一步)").unwrap());

/// Coordinating connector, optionally followed by a demonstrative.
static LEADING_CONNECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:与|及|和|并且|并|或|以及|且)(?:所述|该|上述|本)?").unwrap());

/// Bare demonstrative ("the aforesaid", "said", "this").
static LEADING_DEMONSTRATIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:所述的?|该|上述|本)").unwrap());

/// Verb phrases expressing a physical relation ("fixed to", "mounted on",
/// "arranged in", ...), each with its object-introducing postposition
/// variants and an optional trailing 所述.
static LEADING_VERB_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:固定(?:连接|接)?(?:于|在|到|至)(?:所述)?|安装(?:于|在|到)(?:所述)?|设置(?:于|在|到|至)(?:所述)?|连接(?:于|到|在|至)(?:所述)?|布置(?:于|在|到)(?:所述)?|支撑(?:于|在)(?:所述)?|耦合(?:于|到|在)(?:所述)?|耦接(?:于|到|在)(?:所述)?|附着(?:于|在|到)(?:所述)?|附接(?:于|在|到)(?:所述)?|设(?:于|在)(?:所述)?|位于|形成(?:于|在)(?:所述)?|延伸(?:至|到|向|自|出)(?:所述)?)",
    )
    .unwrap()
});

/// Iteration cap for the normalization fixed point. Real prose converges in
/// two or three passes; the cap keeps crafted input from spinning.
const MAX_NORMALIZE_PASSES: usize = 8;

/// A technical feature and the numeral label bound to it on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureNumberPair {
    /// Normalized (noise-stripped) feature name.
    pub feature: String,
    /// Numeral label, kept as an opaque string ("04" and "4" are distinct).
    pub number: String,
}

/// Strip leading grammatical noise from a candidate feature name.
///
/// The strip rules are applied in a fixed order and the whole sequence is
/// re-run until the string stops changing, so compound noise such as
/// `与所述固定连接于底座` reduces all the way to `底座`.
pub fn normalize_feature(feature: &str) -> String {
    let mut normalized = feature.trim().to_string();
    if normalized.is_empty() {
        return normalized;
    }

    for _ in 0..MAX_NORMALIZE_PASSES {
        let previous = normalized.clone();
        normalized = LEADING_PUNCTUATION.replace(&normalized, "").into_owned();
        normalized = LEADING_ADVERB.replace(&normalized, "").into_owned();
        normalized = LEADING_CONNECTOR.replace(&normalized, "").into_owned();
        normalized = LEADING_DEMONSTRATIVE.replace(&normalized, "").into_owned();
        normalized = LEADING_VERB_PHRASE.replace(&normalized, "").into_owned();
        normalized = normalized.trim().to_string();

        if normalized.is_empty() || normalized == previous {
            break;
        }
    }

    normalized
}

/// Extract all (feature, numeral) pairs from one line, in match order.
///
/// Pairs are recomputed fresh per call; no state is shared across lines.
/// A candidate whose name reduces to digits only (e.g. the `1` in `1(2)`)
/// is discarded as numeral noise rather than a technical feature.
pub fn extract_feature_number_pairs(line: &str) -> Vec<FeatureNumberPair> {
    let mut pairs = Vec::new();

    if line.is_empty() {
        return pairs;
    }

    for caps in PAIR_PATTERN.captures_iter(line) {
        let raw_feature = caps.get(1).map_or("", |m| m.as_str());
        let trailing = TRAILING_TOKEN
            .find(raw_feature)
            .map_or(raw_feature, |m| m.as_str());
        let cleaned = trailing.trim();

        let normalized = normalize_feature(cleaned);
        // An over-aggressive strip that empties the name falls back to the
        // cleaned candidate.
        let feature = if normalized.is_empty() {
            cleaned.to_string()
        } else {
            normalized
        };
        let number = caps[2].to_string();

        if feature.is_empty() || number.is_empty() {
            continue;
        }

        let residue: String = feature.chars().filter(|c| !is_separator(*c)).collect();
        if !residue.is_empty() && residue.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }

        pairs.push(FeatureNumberPair { feature, number });
    }

    pairs
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '、' | '，' | ',' | '.' | ':' | '：' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(line: &str) -> Vec<(String, String)> {
        extract_feature_number_pairs(line)
            .into_iter()
            .map(|p| (p.feature, p.number))
            .collect()
    }

    #[test]
    fn test_half_width_parentheses() {
        assert_eq!(
            pairs("所述固定架(4)与底座(3)相连接"),
            vec![
                ("固定架".to_string(), "4".to_string()),
                ("底座".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_width_parentheses() {
        assert_eq!(
            pairs("连接件（5）固定于支撑板（6）"),
            vec![
                ("连接件".to_string(), "5".to_string()),
                ("支撑板".to_string(), "6".to_string()),
            ]
        );
    }

    #[test]
    fn test_connector_and_verb_phrase_stripping() {
        assert_eq!(
            pairs("所述限位件(2)与所述底座(3)固定连接于所述支撑板（6）"),
            vec![
                ("限位件".to_string(), "2".to_string()),
                ("底座".to_string(), "3".to_string()),
                ("支撑板".to_string(), "6".to_string()),
            ]
        );
    }

    #[test]
    fn test_digit_only_candidates_are_skipped() {
        assert_eq!(pairs("1(2)所示的标记不会被视为技术特征"), vec![]);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(pairs(""), vec![]);
    }

    #[test]
    fn test_line_without_labels() {
        assert_eq!(pairs("本发明涉及一种机械装置。"), vec![]);
    }

    #[test]
    fn test_adverb_stripping() {
        assert_eq!(
            pairs("进一步地所述滑块(7)可沿导轨滑动"),
            vec![("滑块".to_string(), "7".to_string())]
        );
    }

    #[test]
    fn test_leading_zero_numbers_stay_distinct() {
        assert_eq!(
            pairs("底座(04)与底座(4)"),
            vec![
                ("底座".to_string(), "04".to_string()),
                ("底座".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_normalize_is_a_fixed_point() {
        let once = normalize_feature("与所述固定连接于底座");
        assert_eq!(once, "底座");
        assert_eq!(normalize_feature(&once), once);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize_feature(""), "");
        assert_eq!(normalize_feature("   "), "");
    }
}
