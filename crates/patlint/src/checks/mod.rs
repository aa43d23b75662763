//! Checkers for formal defects in patent text.
//!
//! Each checker is a pure, synchronous pass over the same immutable input.
//! Checkers share no state and may run in any order; within one checker,
//! diagnostics preserve the line order of discovery.

mod custom;
mod figure_marks;
mod numbering;
mod other;
mod references;

pub use custom::CustomRuleCheck;
pub use figure_marks::{BodyIndex, FigureMarkCheck};
pub use numbering::NumberingCheck;
pub use other::OtherDefectsCheck;
pub use references::ReferenceCheck;

use crate::diagnostic::Diagnostic;
use crate::document::DocumentType;
use crate::rule::CustomRule;

/// One run's immutable input, shared read-only by all checkers.
pub struct Context<'a> {
    /// Raw body text.
    pub body: &'a str,
    /// Body split into lines, indexed from zero.
    pub lines: Vec<&'a str>,
    /// Resolved document type for this run.
    pub document_type: DocumentType,
    /// Figure-mark legend, when the host supplied one.
    pub legend: Option<&'a str>,
    /// Enabled and disabled rules; checkers filter for themselves.
    pub rules: &'a [CustomRule],
}

impl<'a> Context<'a> {
    /// Build a context for one analysis run.
    pub fn new(
        body: &'a str,
        legend: Option<&'a str>,
        rules: &'a [CustomRule],
        document_type: DocumentType,
    ) -> Self {
        Self {
            body,
            lines: body.lines().collect(),
            document_type,
            legend,
            rules,
        }
    }
}

/// Trait for checkers.
pub trait Check {
    /// Run the check and return its diagnostics.
    fn check(&self, ctx: &Context<'_>) -> Vec<Diagnostic>;
}
