//! Core Settings struct and implementations.

use crate::release::{ArtifactNaming, BuildVariant, CandidateList};
use std::path::{Path, PathBuf};

/// Settings for one release preparation run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use albatross_release::release::SettingsBuilder;
///
/// # fn example() -> albatross_release::release::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/src/albatross-manager")
///     .version_tag("1.2.3")
///     .build()?;
/// assert!(settings.output_dir().ends_with("app/build/outputs/apk/release"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Directory holding `local.properties`.
    project_root: PathBuf,

    /// Directory the packaging step writes the release APK into.
    output_dir: PathBuf,

    /// Variant being built.
    variant: BuildVariant,

    /// Version name used in the finalized file name.
    ///
    /// Only required when a release artifact is actually finalized.
    version_tag: Option<String>,

    naming: ArtifactNaming,
    candidates: CandidateList,
    properties_file_name: String,
    default_store_file: String,
}

impl Settings {
    /// Returns the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the artifact output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the build variant.
    pub fn variant(&self) -> BuildVariant {
        self.variant
    }

    /// Returns the version tag, if one was configured.
    pub fn version_tag(&self) -> Option<&str> {
        self.version_tag.as_deref()
    }

    /// Returns the artifact naming template.
    pub fn naming(&self) -> &ArtifactNaming {
        &self.naming
    }

    /// Returns the candidate artifact names in priority order.
    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Returns the name of the properties file under the project root.
    pub fn properties_file_name(&self) -> &str {
        &self.properties_file_name
    }

    /// Returns the keystore name used when no layer provides one.
    pub fn default_store_file(&self) -> &str {
        &self.default_store_file
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        project_root: PathBuf,
        output_dir: PathBuf,
        variant: BuildVariant,
        version_tag: Option<String>,
        naming: ArtifactNaming,
        candidates: CandidateList,
        properties_file_name: String,
        default_store_file: String,
    ) -> Self {
        Self {
            project_root,
            output_dir,
            variant,
            version_tag,
            naming,
            candidates,
            properties_file_name,
            default_store_file,
        }
    }
}
