//! Application error types with structured error handling.
//!
//! Decoding is total: bad column data degrades to empty values or the
//! unsupported sentinel. The failures that remain are configuration
//! mistakes (unknown color profiles, malformed ids or profiles) and the
//! IO/JSON plumbing of the command-line front end.

use crate::types::ValidationError;
use thiserror::Error;

/// Failure of a single colorize call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Color profile not found: {0}")]
    UnknownProfile(String),

    #[error("Invalid color profile: {0}")]
    InvalidProfile(#[from] ValidationError),
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedInput(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
