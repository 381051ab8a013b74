//! Error types for the diffsum CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Diff content itself never produces an error: parse anomalies are reported
//! as warnings by the `diff` module. These variants cover the outer surfaces.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffsum operations.
#[derive(Error, Debug)]
pub enum DiffsumError {
    /// Invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The diff input could not be read or is unusable.
    #[error("Input error: {0}")]
    InputError(String),

    /// The rendered output could not be written.
    #[error("Output error: {0}")]
    OutputError(String),

    /// A custom template could not be applied.
    #[error("Template error: {0}")]
    TemplateError(String),

    /// A language or classifier pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },
}

impl DiffsumError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffsumError::UserError(_) => exit_codes::USER_ERROR,
            DiffsumError::InputError(_) => exit_codes::INPUT_ERROR,
            DiffsumError::OutputError(_) => exit_codes::OUTPUT_ERROR,
            DiffsumError::TemplateError(_) => exit_codes::USER_ERROR,
            DiffsumError::PatternError { .. } => exit_codes::USER_ERROR,
        }
    }

    pub(crate) fn pattern(pattern: &str, err: impl std::fmt::Display) -> Self {
        DiffsumError::PatternError {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias for diffsum operations.
pub type Result<T> = std::result::Result<T, DiffsumError>;
