//! Diagnostic types reported by the checkers.

use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only, may not require action.
    Info,
    /// Potential issue that should be reviewed.
    Warning,
    /// Definite issue that should be addressed.
    Error,
}

impl Severity {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// Which checker produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Numerals referenced via 所述 but never defined.
    References,
    /// Feature/numeral binding conflicts.
    Numbering,
    /// Legend vs. body cross-consistency.
    FigureMarks,
    /// Fixed formatting heuristics.
    Other,
    /// User-supplied pattern rules.
    Custom,
}

impl CheckKind {
    /// Chinese display name, matching the tab captions patent drafters see.
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::References => "引用检查",
            CheckKind::Numbering => "标号一致性",
            CheckKind::FigureMarks => "附图标记",
            CheckKind::Other => "其他问题",
            CheckKind::Custom => "自定义规则",
        }
    }
}

/// One reported formal issue.
///
/// Diagnostics are immutable once created and owned by the caller for the
/// lifetime of one analysis run. Ids are deterministic functions of the
/// check kind, line index and offending key, so re-running the same input
/// reproduces them exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Identifier unique within one run, stable across runs.
    pub id: String,
    /// Offending line or excerpt.
    pub text: String,
    /// 1-based line number.
    pub line: usize,
    /// Human-readable description.
    pub description: String,
    /// Optional remediation suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Severity level.
    pub severity: Severity,
    /// Custom-rule provenance, when the diagnostic came from a user rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Diagnostic {
    /// Create a new error-severity diagnostic.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        line: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            line,
            description: description.into(),
            suggestion: None,
            severity: Severity::Error,
            category: None,
        }
    }

    /// Set the remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the custom-rule category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_diagnostic() {
        let diag = Diagnostic::new("ref-2-5", "所述连接件(5)", 3, "引用了未定义的标号。")
            .with_suggestion("请先定义该标号。")
            .with_severity(Severity::Warning);

        assert_eq!(diag.id, "ref-2-5");
        assert_eq!(diag.line, 3);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.suggestion.as_deref(), Some("请先定义该标号。"));
        assert_eq!(diag.category, None);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let diag = Diagnostic::new("num-0-底座", "底座(3)", 1, "desc");
        let json = serde_json::to_value(&diag).unwrap();
        assert!(json.get("suggestion").is_none());
        assert!(json.get("category").is_none());
    }
}
