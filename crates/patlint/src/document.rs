//! Heuristic classification of patent text as claims or specification.

use serde::{Deserialize, Serialize};

/// Keywords characteristic of a claims document (权利要求书).
const CLAIMS_KEYWORDS: &[&str] = &[
    "权利要求",
    "其特征在于",
    "其特征是",
    "其特征",
    "所述权利要求",
    "如权利要求",
    "根据权利要求",
];

/// Section headings characteristic of a specification (说明书).
const SPECIFICATION_KEYWORDS: &[&str] = &[
    "说明书",
    "技术领域",
    "背景技术",
    "发明内容",
    "附图说明",
    "具体实施方式",
    "实施例",
];

/// The two patent-document sections with distinct formal conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// The claims (权利要求书).
    Claims,
    /// The specification body (说明书).
    Specification,
    /// Neither convincingly detected.
    #[default]
    Unknown,
}

impl DocumentType {
    /// Classify raw text by keyword frequency and length.
    ///
    /// Claims keywords are counted per line; a second keyword-bearing line
    /// decides immediately. A single hit still counts as claims when the
    /// text is short. Specification section headings or sheer length decide
    /// the rest. Lengths are measured in characters, not bytes.
    pub fn detect(text: &str) -> Self {
        let mut claims_lines = 0usize;

        for line in text.lines() {
            if CLAIMS_KEYWORDS.iter().any(|kw| line.contains(kw)) {
                claims_lines += 1;
                if claims_lines >= 2 {
                    return DocumentType::Claims;
                }
            }
        }

        let char_count = text.chars().count();

        if claims_lines > 0 && char_count < 1000 {
            return DocumentType::Claims;
        }

        if SPECIFICATION_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            return DocumentType::Specification;
        }

        if char_count > 2000 {
            return DocumentType::Specification;
        }

        DocumentType::Unknown
    }

    /// Chinese display name, as shown to patent drafters.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Claims => "权利要求书",
            DocumentType::Specification => "说明书",
            DocumentType::Unknown => "未知类型",
        }
    }

    /// Name of the section a numeral definition belongs in, used when
    /// wording reference diagnostics.
    pub(crate) fn section_name(&self) -> &'static str {
        match self {
            DocumentType::Claims => "权利要求",
            _ => "说明书",
        }
    }
}
