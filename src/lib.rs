//! Release preparation for the Albatross Manager Android app
//!
//! This library provides the two steps that run around the release packaging
//! task:
//! - Signing credential resolution from `local.properties` and the environment
//! - Finalization of the packaged APK under a versioned file name
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod release;

// Re-export commonly used types
pub use error::{CliError, ReleaseError, Result};
