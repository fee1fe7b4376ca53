//! Error types for lintgate operations.
//!
//! This module defines [`LintgateError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LintgateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LintgateError::Other`) for unexpected errors
//! - Every variant maps to a process exit code through [`LintgateError::exit_code`]
//!
//! A lint violation is not an error: it is a [`Failure`](crate::runner::ExitStatus::Failure)
//! result of a run that completed.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a failed lint run.
pub const EXIT_LINT_FAILED: i32 = 1;

/// Exit code when the project, its configuration, or its dependency
/// environment cannot be prepared.
pub const EXIT_ENVIRONMENT: i32 = 2;

/// Exit code when the analysis tool was found but could not be started.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Exit code when the analysis tool cannot be located.
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;

/// Core error type for lintgate operations.
#[derive(Debug, Error)]
pub enum LintgateError {
    /// Project root does not exist or is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// Dependency environment directory does not exist.
    #[error("Dependency environment not found: {path}")]
    EnvironmentMissing { path: PathBuf },

    /// Dependency environment exists but cannot be activated.
    #[error("Invalid dependency environment at {path}: {reason}")]
    EnvironmentInvalid { path: PathBuf, reason: String },

    /// Analysis tool is not in the environment or on PATH.
    #[error("Lint tool '{tool}' not found in {env_bin} or on PATH")]
    ToolNotFound { tool: String, env_bin: PathBuf },

    /// Process could not be spawned or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintgateError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProjectRootNotFound { .. }
            | Self::EnvironmentMissing { .. }
            | Self::EnvironmentInvalid { .. }
            | Self::ConfigNotFound { .. }
            | Self::ConfigParseError { .. }
            | Self::ConfigValidationError { .. } => EXIT_ENVIRONMENT,
            Self::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            Self::CommandFailed { code: None, .. } => EXIT_CANNOT_EXECUTE,
            Self::CommandFailed { .. } | Self::Io(_) | Self::Other(_) => EXIT_LINT_FAILED,
        }
    }
}

/// Result type alias for lintgate operations.
pub type Result<T> = std::result::Result<T, LintgateError>;
