//! Error types and exit codes for roadtrip
//!
//! Exit codes:
//! - 0: Success (including "no route found")
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed map file)

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed map (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roadtrip operations
///
/// An unreachable destination is not an error; see
/// [`crate::graph::NoRoute`].
#[derive(Error, Debug)]
pub enum RoadtripError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("map file not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("invalid map {path:?}: {reason}")]
    InvalidMap { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("no road between {from} and {to}")]
    MissingRoad { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadtripError {
    /// Create an error for a map file that could not be interpreted
    pub fn invalid_map(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RoadtripError::InvalidMap {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadtripError::UnknownFormat(_) | RoadtripError::UsageError(_) => ExitCode::Usage,

            RoadtripError::MapNotFound { .. }
            | RoadtripError::InvalidMap { .. } => ExitCode::Data,

            RoadtripError::MissingRoad { .. }
            | RoadtripError::Io(_)
            | RoadtripError::Json(_)
            | RoadtripError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RoadtripError::UnknownFormat(_) => "unknown_format",
            RoadtripError::UsageError(_) => "usage_error",
            RoadtripError::MapNotFound { .. } => "map_not_found",
            RoadtripError::InvalidMap { .. } => "invalid_map",
            RoadtripError::MissingRoad { .. } => "missing_road",
            RoadtripError::Io(_) => "io_error",
            RoadtripError::Json(_) => "json_error",
            RoadtripError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadtrip operations
pub type Result<T> = std::result::Result<T, RoadtripError>;
