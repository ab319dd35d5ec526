//! File system helpers for artifact finalization.
//!
//! Copy and removal report failures with the paths involved so the
//! orchestrator can show exactly which file could not be moved.

use crate::release::{Error, Result};
use std::{io, path::Path};
use tokio::fs;

/// Copies a regular file, replacing `to` if it already exists.
///
/// Fails if the source path is not a regular file.
pub async fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let copy_failure = |source: io::Error| Error::CopyFailure {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(from).await.map_err(copy_failure)?;
    if !metadata.is_file() {
        return Err(copy_failure(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source is not a regular file",
        )));
    }

    fs::copy(from, to).await.map_err(copy_failure)
}

/// Removes a file. A file that is already gone counts as removed.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::RemoveFailure {
            path: path.to_path_buf(),
            source,
        }),
    }
}
