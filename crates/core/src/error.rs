//! Error types for the normalizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the normalizer library.
///
/// Every variant is raised while a normalizer is being constructed or its
/// configuration loaded. Normalizing text never fails.
#[derive(Error, Debug)]
pub enum NormalizerError {
    /// Script identifier with no registered codepoint base
    #[error("Unsupported script: {0}")]
    UnsupportedScript(String),

    /// Unrecognized nasal mode, vowel-ending policy or other setting
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rule table offset that falls outside the script's block
    #[error("Offset {offset:#04x} is outside the {script} block")]
    OffsetOutOfRange { offset: u32, script: String },

    /// Rule pattern that failed to compile
    #[error("Invalid rule pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for normalizer operations.
pub type Result<T> = std::result::Result<T, NormalizerError>;
