//! Main engine struct and public API.

use serde::{Deserialize, Serialize};

use crate::checks::{
    Check, Context, CustomRuleCheck, FigureMarkCheck, NumberingCheck, OtherDefectsCheck,
    ReferenceCheck,
};
use crate::diagnostic::{Diagnostic, Severity};
use crate::document::DocumentType;
use crate::rule::CustomRule;

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct PatlintConfig {
    /// Run the figure-mark cross-consistency check when a legend is given.
    /// Hosts that hide the legend input turn this off.
    pub check_figure_marks: bool,
}

impl Default for PatlintConfig {
    fn default() -> Self {
        Self {
            check_figure_marks: true,
        }
    }
}

/// Result of analyzing one document: five independent diagnostic lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Document type the run used (detected or overridden).
    pub document_type: DocumentType,
    /// Numerals referenced but never defined.
    pub references: Vec<Diagnostic>,
    /// Feature/numeral binding conflicts.
    pub numbers: Vec<Diagnostic>,
    /// Legend vs. body cross-consistency issues.
    pub figure_marks: Vec<Diagnostic>,
    /// Formatting heuristics.
    pub other: Vec<Diagnostic>,
    /// Custom-rule matches.
    pub custom: Vec<Diagnostic>,
}

impl AnalysisReport {
    /// Total number of diagnostics across all checks.
    pub fn total(&self) -> usize {
        self.iter().count()
    }

    /// True when no check reported anything.
    pub fn is_clean(&self) -> bool {
        self.iter().next().is_none()
    }

    /// True when any diagnostic is error severity.
    pub fn has_errors(&self) -> bool {
        self.iter().any(|d| d.severity == Severity::Error)
    }

    /// All diagnostics, check by check.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.references
            .iter()
            .chain(&self.numbers)
            .chain(&self.figure_marks)
            .chain(&self.other)
            .chain(&self.custom)
    }

    /// Compute summary counts.
    pub fn summary(&self) -> AnalysisSummary {
        let mut by_severity = SeverityCounts::default();
        for diag in self.iter() {
            match diag.severity {
                Severity::Error => by_severity.error += 1,
                Severity::Warning => by_severity.warning += 1,
                Severity::Info => by_severity.info += 1,
            }
        }

        AnalysisSummary {
            total: self.total(),
            by_severity,
            by_check: CheckCounts {
                references: self.references.len(),
                numbers: self.numbers.len(),
                figure_marks: self.figure_marks.len(),
                other: self.other.len(),
                custom: self.custom.len(),
            },
        }
    }
}

/// Summary of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub by_severity: SeverityCounts,
    pub by_check: CheckCounts,
}

/// Counts of diagnostics by severity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

/// Counts of diagnostics by check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckCounts {
    pub references: usize,
    pub numbers: usize,
    pub figure_marks: usize,
    pub other: usize,
    pub custom: usize,
}

/// The analysis engine.
///
/// Stateless between runs: every `analyze` call works only on its arguments
/// and returns an owned report, so runs are deterministic and may be
/// discarded by the host at any point.
#[derive(Debug, Clone, Default)]
pub struct Patlint {
    config: PatlintConfig,
}

impl Patlint {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(PatlintConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: PatlintConfig) -> Self {
        Self { config }
    }

    /// Analyze one document.
    ///
    /// `type_override` bypasses the classifier when the host already knows
    /// the document type. The rule slice is a read-only snapshot; the engine
    /// never touches persistent storage.
    pub fn analyze(
        &self,
        body: &str,
        legend: Option<&str>,
        rules: &[CustomRule],
        type_override: Option<DocumentType>,
    ) -> AnalysisReport {
        let document_type = type_override.unwrap_or_else(|| DocumentType::detect(body));
        let ctx = Context::new(body, legend, rules, document_type);

        AnalysisReport {
            document_type,
            references: ReferenceCheck.check(&ctx),
            numbers: NumberingCheck.check(&ctx),
            figure_marks: if self.config.check_figure_marks {
                FigureMarkCheck.check(&ctx)
            } else {
                Vec::new()
            },
            other: OtherDefectsCheck.check(&ctx),
            custom: CustomRuleCheck.check(&ctx),
        }
    }
}
