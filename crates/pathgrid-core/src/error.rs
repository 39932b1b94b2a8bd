//! Error types and exit codes for pathgrid
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad start vertex)
//! - 3: Data error (missing input file, malformed matrix)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the pathgrid CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathgrid operations
#[derive(Error, Debug)]
pub enum PathgridError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid start vertex: {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: i64, vertex_count: usize },

    // Data errors (exit code 3)
    #[error("cannot open input file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vertex count: {count}")]
    InvalidSize { count: i64 },

    #[error("invalid adjacency matrix: {reason}")]
    InvalidMatrix { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathgridError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathgridError::UnknownFormat(_)
            | PathgridError::UsageError(_)
            | PathgridError::InvalidVertex { .. } => ExitCode::Usage,

            PathgridError::FileOpen { .. }
            | PathgridError::InvalidSize { .. }
            | PathgridError::InvalidMatrix { .. } => ExitCode::Data,

            PathgridError::Io(_)
            | PathgridError::Json(_)
            | PathgridError::Toml(_)
            | PathgridError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathgridError::UnknownFormat(_) => "unknown_format",
            PathgridError::UsageError(_) => "usage_error",
            PathgridError::InvalidVertex { .. } => "invalid_vertex",
            PathgridError::FileOpen { .. } => "file_open",
            PathgridError::InvalidSize { .. } => "invalid_size",
            PathgridError::InvalidMatrix { .. } => "invalid_matrix",
            PathgridError::Io(_) => "io_error",
            PathgridError::Json(_) => "json_error",
            PathgridError::Toml(_) => "toml_error",
            PathgridError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for pathgrid operations
pub type Result<T> = std::result::Result<T, PathgridError>;
