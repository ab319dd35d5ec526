//! Command line interface for release preparation.
//!
//! This module provides the CLI the build orchestrator calls, with
//! argument parsing, command execution and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{
    Args, Command, FinalizeArgs, ReleaseArgs, ResolveArgs, RuntimeConfig, VersionArgs,
};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(args).await
}

/// Execute already-parsed arguments
pub async fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    commands::execute(&args.command, &config).await
}
