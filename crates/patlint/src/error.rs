//! Error types for the patlint library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for patlint operations.
///
/// Analysis itself is infallible: malformed input degrades to "no diagnostic
/// produced". Errors only arise at the host boundary (rule storage, file
/// reads) and when compiling an individual rule's pattern.
#[derive(Debug, Error)]
pub enum PatlintError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule list (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A custom rule's pattern failed to compile.
    #[error("invalid pattern in rule '{rule}': {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for patlint operations.
pub type Result<T> = std::result::Result<T, PatlintError>;
