//! Orchestrator hook for release builds.
//!
//! The build orchestrator asks for a signing identity when it configures the
//! build, and calls [`ReleasePipeline::after_packaging`] once packaging has
//! finished. Only release builds are signed, and finalization runs only
//! after release packaging succeeded.

use crate::release::{
    ArtifactFinalizer, Context, CredentialResolver, EnvironmentAccessor, FinalizeResult, Result,
    Settings, SigningIdentity,
};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Build variant being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildVariant {
    Debug,
    #[default]
    Release,
}

impl FromStr for BuildVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            other => Err(format!(
                "Invalid build variant: {other}. Valid variants: debug, release"
            )),
        }
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "debug",
            Self::Release => "release",
        })
    }
}

/// How the packaging task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackagingOutcome {
    #[default]
    Succeeded,
    Failed,
}

impl FromStr for PackagingOutcome {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "succeeded" | "success" => Ok(Self::Succeeded),
            "failed" | "failure" => Ok(Self::Failed),
            other => Err(format!(
                "Invalid packaging outcome: {other}. Valid outcomes: succeeded, failed"
            )),
        }
    }
}

/// Why finalization did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Finalization only applies to release builds
    NotRelease { variant: BuildVariant },
    /// Packaging did not succeed
    PackagingFailed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRelease { variant } => write!(f, "{variant} builds are not finalized"),
            Self::PackagingFailed => f.write_str("packaging did not succeed"),
        }
    }
}

/// Result of the post-packaging hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "hook", rename_all = "snake_case")]
pub enum HookOutcome {
    Skipped(SkipReason),
    Ran(FinalizeResult),
}

/// Credential resolution and finalization wired to one build's settings.
#[derive(Debug, Clone)]
pub struct ReleasePipeline {
    settings: Settings,
    resolver: CredentialResolver,
    finalizer: ArtifactFinalizer,
}

impl ReleasePipeline {
    pub fn new(settings: Settings) -> Self {
        let resolver = CredentialResolver::from_settings(&settings);
        let finalizer = ArtifactFinalizer::from_settings(&settings);
        Self {
            settings,
            resolver,
            finalizer,
        }
    }

    /// Returns the settings this pipeline runs with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Signing identity for the build, or `None` for non-release variants.
    ///
    /// Debug builds do not read `local.properties` at all.
    pub fn signing_identity<E: EnvironmentAccessor>(
        &self,
        env: &E,
    ) -> Result<Option<SigningIdentity>> {
        if self.settings.variant() != BuildVariant::Release {
            log::debug!(
                "Skipping credential resolution for {} build",
                self.settings.variant()
            );
            return Ok(None);
        }

        self.resolver
            .resolve(self.settings.project_root(), env)
            .map(Some)
    }

    /// Runs finalization if this is a release build whose packaging succeeded.
    ///
    /// # Errors
    ///
    /// Finalization errors, and a missing version tag when finalization runs.
    pub async fn after_packaging(&self, outcome: PackagingOutcome) -> Result<HookOutcome> {
        let variant = self.settings.variant();
        if variant != BuildVariant::Release {
            log::info!("Skipping artifact finalization: {variant} build");
            return Ok(HookOutcome::Skipped(SkipReason::NotRelease { variant }));
        }
        if outcome == PackagingOutcome::Failed {
            log::info!("Skipping artifact finalization: packaging failed");
            return Ok(HookOutcome::Skipped(SkipReason::PackagingFailed));
        }

        let version = self
            .settings
            .version_tag()
            .context("a version tag is required to finalize a release build")?;

        self.finalizer
            .finalize(self.settings.output_dir(), version)
            .await
            .map(HookOutcome::Ran)
    }
}
