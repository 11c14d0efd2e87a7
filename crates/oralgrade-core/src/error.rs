//! Error types and exit codes for oralgrade
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unparsable percent)
//! - 3: Data error (no active document, invalid frontmatter, invalid config)

mod macros;

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
    /// Data error - missing document, invalid frontmatter (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during oralgrade operations
#[derive(Error, Debug)]
pub enum OralgradeError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("invalid percent: {value} (expected a fraction like 0.75 or a percentage like 75%)")]
    InvalidPercent { value: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("no active document{}", path_suffix(.path))]
    NoActiveDocument { path: Option<PathBuf> },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl OralgradeError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        OralgradeError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            OralgradeError::UnknownFormat(_)
            | OralgradeError::DuplicateFormat
            | OralgradeError::InvalidPercent { .. }
            | OralgradeError::UsageError(_) => ExitCode::Usage,

            OralgradeError::NoActiveDocument { .. }
            | OralgradeError::InvalidFrontmatter { .. }
            | OralgradeError::InvalidConfig { .. } => ExitCode::Data,

            OralgradeError::Io(_)
            | OralgradeError::Yaml(_)
            | OralgradeError::Json(_)
            | OralgradeError::Toml(_)
            | OralgradeError::FailedOperationWithTarget { .. }
            | OralgradeError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            OralgradeError::UnknownFormat(_) => "unknown_format",
            OralgradeError::DuplicateFormat => "duplicate_format",
            OralgradeError::InvalidPercent { .. } => "invalid_percent",
            OralgradeError::UsageError(_) => "usage_error",
            OralgradeError::NoActiveDocument { .. } => "no_active_document",
            OralgradeError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            OralgradeError::InvalidConfig { .. } => "invalid_config",
            OralgradeError::Io(_) => "io_error",
            OralgradeError::Yaml(_) => "yaml_error",
            OralgradeError::Json(_) => "json_error",
            OralgradeError::Toml(_) => "toml_error",
            OralgradeError::FailedOperationWithTarget { .. } => "failed_operation",
            OralgradeError::Other(_) => "other",
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

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(": {}", p.display()))
        .unwrap_or_default()
}

/// Result type alias for oralgrade operations
pub type Result<T> = std::result::Result<T, OralgradeError>;
