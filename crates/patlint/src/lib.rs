//! Patlint: formal-defect analysis for Chinese patent text.
//!
//! Patlint inspects claims or specification text for the formal mistakes
//! patent drafters make: numerals referenced but never defined, one feature
//! carrying two numerals (or one numeral carrying two features), a
//! figure-mark legend that disagrees with the body text, and violations of
//! user-defined pattern rules.
//!
//! # Core Principles
//!
//! - **Pure analysis**: checkers are deterministic functions over immutable
//!   input text; no I/O, no cross-run state
//! - **Degrade, never abort**: malformed rules or legend lines produce no
//!   diagnostics rather than failing the run
//! - **Opaque numerals**: labels are strings, "04" and "4" are distinct
//!
//! # Example
//!
//! ```
//! use patlint::Patlint;
//!
//! let engine = Patlint::new();
//! let body = "所述固定架(4)与底座(3)相连接。\n所述固定架(5)连接到支撑板。";
//! let report = engine.analyze(body, None, &[], None);
//!
//! assert_eq!(report.numbers.len(), 1);
//! ```

pub mod checks;
pub mod diagnostic;
pub mod document;
pub mod error;
pub mod extract;
pub mod rule;

mod analyzer;

pub use analyzer::{AnalysisReport, AnalysisSummary, CheckCounts, Patlint, PatlintConfig, SeverityCounts};
pub use diagnostic::{CheckKind, Diagnostic, Severity};
pub use document::DocumentType;
pub use error::{PatlintError, Result};
pub use extract::{extract_feature_number_pairs, FeatureNumberPair};
pub use rule::{CustomRule, RuleStore};
