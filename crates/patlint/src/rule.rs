//! User-defined pattern rules and their storage boundary.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Severity;
use crate::error::{PatlintError, Result};

/// A user-supplied pattern rule applied line-by-line to the text.
///
/// Rules are owned and persisted by the host; the engine only reads an
/// enabled-rule snapshot per run and never mutates one. Field names
/// serialize as camelCase so existing rule-export files load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Literal substring or regular expression, per `is_regex`.
    pub pattern: String,
    pub is_regex: bool,
    /// Description carried verbatim onto every diagnostic the rule emits.
    pub error_message: String,
    #[serde(default)]
    pub suggestion: String,
    pub severity: Severity,
    pub enabled: bool,
    /// Stored as a millisecond epoch, the format legacy rule files carry.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Optional grouping; legacy records without one default to empty.
    #[serde(default)]
    pub category: String,
}

impl CustomRule {
    /// Create an enabled literal-substring rule.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        pattern: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            pattern: pattern.into(),
            is_regex: false,
            error_message: error_message.into(),
            suggestion: String::new(),
            severity: Severity::Error,
            enabled: true,
            created_at: Utc::now(),
            category: String::new(),
        }
    }

    /// Mark the pattern as a regular expression.
    pub fn regex(mut self) -> Self {
        self.is_regex = true;
        self
    }

    /// Set the remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Disable the rule.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Compile the pattern for a regex rule.
    ///
    /// Patterns come from untrusted user input, so compilation failure is a
    /// recoverable per-rule error, never a run abort.
    pub fn compiled_pattern(&self) -> Result<Regex> {
        Regex::new(&self.pattern).map_err(|source| PatlintError::Pattern {
            rule: self.name.clone(),
            source,
        })
    }
}

/// Storage boundary for the host's persisted rule list.
///
/// The engine itself is storage-agnostic; hosts inject an implementation.
/// The CLI persists a JSON array; a web host might use a key-value store.
pub trait RuleStore {
    /// Load the full rule list.
    fn load(&self) -> Result<Vec<CustomRule>>;

    /// Persist the full rule list, replacing the previous one.
    fn save(&self, rules: &[CustomRule]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_json_without_category_loads() {
        let json = r#"{
            "id": "rule-1",
            "name": "禁止使用大约",
            "description": "",
            "pattern": "大约",
            "isRegex": false,
            "errorMessage": "权利要求中不应使用模糊用语。",
            "suggestion": "请使用确定的数值或范围。",
            "severity": "warning",
            "enabled": true,
            "createdAt": 1714521600000
        }"#;

        let rule: CustomRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.name, "禁止使用大约");
        assert_eq!(rule.category, "");
        assert!(!rule.is_regex);
        assert_eq!(rule.severity, Severity::Warning);
    }

    #[test]
    fn test_round_trip_keeps_camel_case() {
        let mut rule = CustomRule::new("r1", "n", "p", "m").with_category("措辞");
        // Pin to whole milliseconds; that is all the wire format carries.
        rule.created_at = DateTime::from_timestamp_millis(1714521600000).unwrap();
        let json = serde_json::to_value(&rule).unwrap();
        assert!(json.get("isRegex").is_some());
        assert!(json.get("errorMessage").is_some());
        assert!(json.get("createdAt").is_some());

        let back: CustomRule = serde_json::from_value(json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_compiled_pattern_rejects_bad_regex() {
        let rule = CustomRule::new("r1", "bad", "([unclosed", "m").regex();
        assert!(rule.compiled_pattern().is_err());
    }
}
