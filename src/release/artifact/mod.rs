//! Release artifact finalization.
//!
//! After packaging, the release APK sits in the output directory under one of
//! a few known names depending on whether it was signed inline. The
//! [`ArtifactFinalizer`] picks the highest-priority candidate that exists,
//! copies it to `<prefix>-<version>.<extension>` and removes the original.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA-256 of the finalized artifact
//! - [`finalizer`] - the [`ArtifactFinalizer`] itself

mod checksum;
mod finalizer;

pub use checksum::calculate_sha256;
pub use finalizer::ArtifactFinalizer;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Prefix of the finalized artifact name.
pub const DEFAULT_ARTIFACT_PREFIX: &str = "AlbatrossManager";

/// Extension of the finalized artifact.
pub const DEFAULT_ARTIFACT_EXTENSION: &str = "apk";

/// A file name the packaging step may produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactCandidate {
    name: String,
    priority: u32,
    signed: bool,
}

impl ArtifactCandidate {
    /// Lower `priority` values are preferred.
    pub fn new(name: impl Into<String>, priority: u32, signed: bool) -> Self {
        Self {
            name: name.into(),
            priority,
            signed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Whether this name corresponds to an inline-signed package.
    pub fn is_signed(&self) -> bool {
        self.signed
    }
}

/// Immutable candidate names in priority order.
///
/// Order is fixed at construction and never derived from the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    candidates: Vec<ArtifactCandidate>,
}

impl CandidateList {
    /// Sorts by priority; candidates with equal priority keep their given order.
    pub fn new(mut candidates: Vec<ArtifactCandidate>) -> Self {
        candidates.sort_by_key(ArtifactCandidate::priority);
        Self { candidates }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactCandidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Default for CandidateList {
    /// `app-release.apk` (signed) before `app-release-unsigned.apk`.
    fn default() -> Self {
        Self::new(vec![
            ArtifactCandidate::new("app-release.apk", 0, true),
            ArtifactCandidate::new("app-release-unsigned.apk", 1, false),
        ])
    }
}

/// Naming template for the finalized artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNaming {
    prefix: String,
    extension: String,
}

impl ArtifactNaming {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// `<prefix>-<version>.<extension>`. The version is used verbatim.
    pub fn file_name(&self, version: &str) -> String {
        format!("{}-{}.{}", self.prefix, version, self.extension)
    }

    /// Destination path inside `output_dir`.
    pub fn destination(&self, output_dir: &Path, version: &str) -> PathBuf {
        output_dir.join(self.file_name(version))
    }
}

impl Default for ArtifactNaming {
    fn default() -> Self {
        Self::new(DEFAULT_ARTIFACT_PREFIX, DEFAULT_ARTIFACT_EXTENSION)
    }
}

/// A candidate that was copied to its versioned name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalizedArtifact {
    pub candidate: ArtifactCandidate,
    /// Original location, removed after the copy
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the destination
    pub sha256: String,
}

/// Outcome of [`ArtifactFinalizer::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FinalizeResult {
    /// The output directory does not exist; nothing was produced
    OutputDirMissing { destination: PathBuf },
    /// No candidate name is present (including already-finalized reruns)
    NoArtifact { destination: PathBuf },
    /// A candidate was renamed
    Finalized(FinalizedArtifact),
}

impl FinalizeResult {
    /// Path the artifact was, or would have been, written to.
    pub fn destination(&self) -> &Path {
        match self {
            Self::OutputDirMissing { destination } | Self::NoArtifact { destination } => {
                destination
            }
            Self::Finalized(artifact) => &artifact.destination,
        }
    }

    /// The candidate that was finalized, if any.
    pub fn candidate(&self) -> Option<&ArtifactCandidate> {
        match self {
            Self::Finalized(artifact) => Some(&artifact.candidate),
            _ => None,
        }
    }

    /// True when nothing was touched.
    pub fn is_noop(&self) -> bool {
        !matches!(self, Self::Finalized(_))
    }
}
