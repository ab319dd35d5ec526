//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with
//! validation and environment-variable fallbacks for CI use.

use crate::release::{BuildVariant, PackagingOutcome};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Release preparation for the Albatross Manager APK
#[derive(Parser, Debug)]
#[command(
    name = "albatross_release",
    version,
    about = "Signing credential resolution and release APK finalization",
    long_about = "Resolves release signing credentials from local.properties and the environment,
and renames the packaged release APK to AlbatrossManager-<version>.apk.

Usage:
  albatross_release resolve --project-root .
  albatross_release finalize --output-dir app/build/outputs/apk/release --version-tag 1.2.3
  albatross_release release --project-root . --variant release

A missing output directory or artifact is not an error (exit code 0)."
)]
pub struct Args {
    /// Print progress details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors and requested reports
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the release signing identity (secrets are never printed)
    Resolve(ResolveArgs),

    /// Rename the packaged release APK to its versioned name
    Finalize(FinalizeArgs),

    /// Resolve credentials, then run the post-packaging finalization hook
    Release(ReleaseArgs),
}

/// Arguments for `resolve`
#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Project root containing local.properties
    #[arg(long, env = "ALBATROSS_PROJECT_ROOT", default_value = ".")]
    pub project_root: PathBuf,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `finalize`
#[derive(clap::Args, Debug)]
pub struct FinalizeArgs {
    /// Directory the packaging step wrote the release APK into
    #[arg(short = 'o', long, env = "ALBATROSS_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub version: VersionArgs,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `release`
#[derive(clap::Args, Debug)]
pub struct ReleaseArgs {
    /// Project root containing local.properties
    #[arg(long, env = "ALBATROSS_PROJECT_ROOT", default_value = ".")]
    pub project_root: PathBuf,

    /// Application module directory under the project root
    #[arg(long, default_value = "app")]
    pub module: String,

    /// Override the release output directory
    ///
    /// Default: <project-root>/<module>/build/outputs/apk/release
    #[arg(short = 'o', long, env = "ALBATROSS_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Build variant: debug or release
    #[arg(long, default_value = "release", value_name = "VARIANT")]
    pub variant: BuildVariant,

    /// Outcome of the packaging task: succeeded or failed
    #[arg(long, default_value = "succeeded", value_name = "OUTCOME")]
    pub packaging: PackagingOutcome,

    #[command(flatten)]
    pub version: VersionArgs,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}

/// Where the version tag comes from
#[derive(clap::Args, Debug, Clone)]
pub struct VersionArgs {
    /// Version name used in the finalized file name
    #[arg(long, env = "ALBATROSS_VERSION_TAG", value_name = "VERSION")]
    pub version_tag: Option<String>,

    /// Gradle version catalog to read [versions].versionName from
    #[arg(long, value_name = "FILE")]
    pub version_catalog: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("--verbose and --quiet cannot be used together".to_string());
        }

        let version = match &self.command {
            Command::Resolve(_) => None,
            Command::Finalize(args) => Some(&args.version),
            Command::Release(args) => {
                if args.module.is_empty() || args.module.contains(['/', '\\']) {
                    return Err(format!(
                        "Invalid module: '{}'. Expected a single directory name",
                        args.module
                    ));
                }
                Some(&args.version)
            }
        };

        let empty_tag = version
            .and_then(|v| v.version_tag.as_deref())
            .is_some_and(|tag| tag.trim().is_empty());
        if empty_tag {
            return Err("Version tag cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);
        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Print a machine-readable report, even in quiet mode
    pub fn report(&self, text: &str) -> std::io::Result<()> {
        self.output.plain(text)
    }
}
