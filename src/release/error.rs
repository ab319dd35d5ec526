//! Error types for release preparation.
//!
//! Missing secrets and missing artifacts are not errors. They are reported
//! as unset fields and no-op results.

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for release operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by credential resolution and artifact finalization
#[derive(Error, Debug)]
pub enum Error {
    /// `local.properties` exists but cannot be parsed
    #[error("malformed properties file {} (line {line}): {reason}", path.display())]
    ConfigParse {
        /// File that failed to parse
        path: PathBuf,
        /// 1-based line where the problem starts
        line: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Copying the candidate artifact to its versioned name failed
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyFailure {
        /// Candidate artifact
        from: PathBuf,
        /// Versioned destination
        to: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Removing the original candidate after the copy failed
    #[error("copied artifact but failed to remove original {}: {source}", path.display())]
    RemoveFailure {
        /// Candidate artifact that is still present
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The version catalog is missing, unparsable or lacks the version entry
    #[error("version catalog {}: {reason}", path.display())]
    VersionCatalog {
        /// Catalog file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// File system error with the operation and path that produced it
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// Operation being attempted
        context: String,
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// IO errors without further context
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

/// Attach file system context to I/O results.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`] naming `context` and `path`.
    fn fs_context(self, context: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Turn an absent value into a [`Error::GenericError`].
pub trait Context<T> {
    /// Returns the contained value or an error carrying `message`.
    fn context<C: std::fmt::Display>(self, message: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: std::fmt::Display>(self, message: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(message.to_string()))
    }
}

/// Return early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::release::Error::GenericError(format!($($arg)*)))
    };
}
