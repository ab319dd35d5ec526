//! Builder for constructing Settings.

use super::{DEFAULT_MODULE, RELEASE_OUTPUT_SUBDIR, Settings};
use crate::release::{
    ArtifactNaming, BuildVariant, CandidateList, Context, DEFAULT_STORE_FILE,
    PROPERTIES_FILE_NAME, Result,
};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Only the project root is required. The output directory defaults to
/// `<project_root>/<module>/build/outputs/apk/release`.
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    module: Option<String>,
    output_dir: Option<PathBuf>,
    variant: BuildVariant,
    version_tag: Option<String>,
    naming: Option<ArtifactNaming>,
    candidates: Option<CandidateList>,
    properties_file_name: Option<String>,
    default_store_file: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root (where `local.properties` lives).
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the application module directory name.
    ///
    /// Default: `app`
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Overrides the artifact output directory.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build variant.
    ///
    /// Default: [`BuildVariant::Release`]
    pub fn variant(mut self, variant: BuildVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the version tag used in the finalized file name.
    pub fn version_tag(mut self, version: impl Into<String>) -> Self {
        self.version_tag = Some(version.into());
        self
    }

    /// Sets the finalized artifact naming template.
    ///
    /// Default: `AlbatrossManager-<version>.apk`
    pub fn naming(mut self, naming: ArtifactNaming) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Sets the candidate artifact names.
    ///
    /// Default: `app-release.apk`, then `app-release-unsigned.apk`
    pub fn candidates(mut self, candidates: CandidateList) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Sets the properties file name.
    ///
    /// Default: `local.properties`
    pub fn properties_file_name(mut self, name: impl Into<String>) -> Self {
        self.properties_file_name = Some(name.into());
        self
    }

    /// Sets the keystore name used when no layer provides one.
    ///
    /// Default: `qing.jks`
    pub fn default_store_file(mut self, name: impl Into<String>) -> Self {
        self.default_store_file = Some(name.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_root` is missing.
    pub fn build(self) -> Result<Settings> {
        let project_root = self.project_root.context("project_root is required")?;

        let output_dir = self.output_dir.unwrap_or_else(|| {
            let module = self.module.as_deref().unwrap_or(DEFAULT_MODULE);
            RELEASE_OUTPUT_SUBDIR
                .iter()
                .fold(project_root.join(module), |dir, part| dir.join(part))
        });

        Ok(Settings::new(
            project_root,
            output_dir,
            self.variant,
            self.version_tag,
            self.naming.unwrap_or_default(),
            self.candidates.unwrap_or_default(),
            self.properties_file_name
                .unwrap_or_else(|| PROPERTIES_FILE_NAME.to_string()),
            self.default_store_file
                .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string()),
        ))
    }
}
