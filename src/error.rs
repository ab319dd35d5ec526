//! Crate-level error types.
//!
//! Domain errors from [`crate::release`] are wrapped here together with CLI
//! and serialization errors, each with recovery suggestions for the user.

use crate::release::Error as ReleaseStepError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type surfaced to the orchestrator
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credential resolution or finalization errors
    #[error("{0}")]
    Release(#[from] ReleaseStepError),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Release(ReleaseStepError::ConfigParse { path, .. }) => vec![
                format!("Fix the syntax of {}", path.display()),
                "Escape literal backslashes as \\\\ and write unicode escapes as \\uXXXX"
                    .to_string(),
                "Or remove the file and provide RELEASE_* environment variables instead"
                    .to_string(),
            ],
            Self::Release(ReleaseStepError::CopyFailure { to, .. }) => vec![
                format!(
                    "Check that {} is writable and the disk is not full",
                    to.parent().unwrap_or(to.as_path()).display()
                ),
            ],
            Self::Release(ReleaseStepError::RemoveFailure { path, .. }) => vec![
                format!(
                    "The versioned copy exists; remove {} manually",
                    path.display()
                ),
            ],
            Self::Release(ReleaseStepError::VersionCatalog { .. }) => vec![
                "Pass --version-tag explicitly or fix [versions].versionName in the catalog"
                    .to_string(),
            ],
            Self::Cli(_) => vec!["Run with --help to see valid arguments".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
