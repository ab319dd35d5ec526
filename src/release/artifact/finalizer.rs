//! Renames the packaged release artifact to its versioned name.

use super::{
    ArtifactCandidate, ArtifactNaming, CandidateList, FinalizeResult, FinalizedArtifact,
    calculate_sha256,
};
use crate::{
    bail,
    release::{ErrorExt, Result, Settings, utils::fs},
};
use std::path::{Path, PathBuf};

/// Locates the packaged artifact and moves it to its versioned name.
///
/// Reruns are safe: once the candidate has been renamed it is no longer
/// found under its original name and the next run is a no-op.
///
/// # Examples
///
/// ```no_run
/// use albatross_release::release::ArtifactFinalizer;
/// use std::path::Path;
///
/// # async fn example() -> albatross_release::release::Result<()> {
/// let finalizer = ArtifactFinalizer::default();
/// let result = finalizer
///     .finalize(Path::new("app/build/outputs/apk/release"), "1.2.3")
///     .await?;
/// println!("{}", result.destination().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArtifactFinalizer {
    naming: ArtifactNaming,
    candidates: CandidateList,
}

impl ArtifactFinalizer {
    pub fn new(naming: ArtifactNaming, candidates: CandidateList) -> Self {
        Self { naming, candidates }
    }

    /// Finalizer using the naming and candidates configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.naming().clone(), settings.candidates().clone())
    }

    pub fn naming(&self) -> &ArtifactNaming {
        &self.naming
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Finalizes the artifact in `output_dir` for `version`.
    ///
    /// # Returns
    ///
    /// * [`FinalizeResult::OutputDirMissing`] - `output_dir` does not exist
    /// * [`FinalizeResult::NoArtifact`] - no candidate name is present
    /// * [`FinalizeResult::Finalized`] - the candidate was copied and removed
    ///
    /// # Errors
    ///
    /// [`Error::CopyFailure`](crate::release::Error::CopyFailure) or
    /// [`Error::RemoveFailure`](crate::release::Error::RemoveFailure) when the
    /// file system refuses the move; `output_dir` existing but not being a
    /// directory is also an error.
    pub async fn finalize(&self, output_dir: &Path, version: &str) -> Result<FinalizeResult> {
        let destination = self.naming.destination(output_dir, version);

        match tokio::fs::metadata(output_dir).await {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => bail!(
                "Output path {} exists but is not a directory",
                output_dir.display()
            ),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "Output directory {} does not exist, nothing to finalize",
                    output_dir.display()
                );
                return Ok(FinalizeResult::OutputDirMissing { destination });
            }
            Err(e) => return Err(e).fs_context("reading output directory metadata", output_dir),
        }

        let Some((candidate, source)) = self.locate(output_dir, &destination).await? else {
            log::info!(
                "No release artifact found in {}, nothing to finalize",
                output_dir.display()
            );
            return Ok(FinalizeResult::NoArtifact { destination });
        };

        log::info!(
            "Finalizing {} -> {}",
            source.display(),
            destination.display()
        );
        let size = fs::copy_file(&source, &destination).await?;
        fs::remove_file(&source).await?;
        let sha256 = calculate_sha256(&destination).await?;

        log::info!("✓ Finalized release artifact: {}", destination.display());

        Ok(FinalizeResult::Finalized(FinalizedArtifact {
            candidate,
            source,
            destination,
            size,
            sha256,
        }))
    }

    /// First candidate, in priority order, that exists as a regular file.
    async fn locate(
        &self,
        output_dir: &Path,
        destination: &Path,
    ) -> Result<Option<(ArtifactCandidate, PathBuf)>> {
        for candidate in self.candidates.iter() {
            let path = output_dir.join(candidate.name());

            // Copying a file onto itself and then deleting it would lose it.
            if path == destination {
                log::debug!(
                    "Candidate {} already has the finalized name, skipping",
                    candidate.name()
                );
                continue;
            }

            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => {
                    log::debug!("Found candidate {}", path.display());
                    return Ok(Some((candidate.clone(), path)));
                }
                Ok(_) => {
                    log::debug!("Skipping non-regular file: {}", path.display());
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    log::debug!("Candidate {} not present", candidate.name());
                }
                Err(e) => return Err(e).fs_context("inspecting candidate artifact", &path),
            }
        }

        Ok(None)
    }
}
