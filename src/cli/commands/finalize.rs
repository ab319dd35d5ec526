//! `finalize` command: rename the packaged release APK.

use super::resolve_version;
use crate::{
    cli::{FinalizeArgs, RuntimeConfig},
    error::Result,
    release::{ArtifactFinalizer, FinalizeResult},
};

pub async fn execute(args: &FinalizeArgs, config: &RuntimeConfig) -> Result<i32> {
    let version = resolve_version(&args.version, None, config)?;
    let result = ArtifactFinalizer::default()
        .finalize(&args.output_dir, &version)
        .await?;

    if args.json {
        config.report(&serde_json::to_string_pretty(&result)?)?;
    } else {
        print_result(&result, config)?;
    }

    Ok(0)
}

pub(super) fn print_result(result: &FinalizeResult, config: &RuntimeConfig) -> Result<()> {
    match result {
        FinalizeResult::OutputDirMissing { .. } => {
            config.verbose_println("Output directory does not exist, nothing to finalize")?;
        }
        FinalizeResult::NoArtifact { destination } => {
            config.verbose_println(&format!(
                "No release artifact to finalize (expected output: {})",
                destination.display()
            ))?;
        }
        FinalizeResult::Finalized(artifact) => {
            config.success(&format!(
                "Finalized {} -> {}",
                artifact.candidate.name(),
                artifact.destination.display()
            ))?;
            config.indent(&format!("Size:   {} bytes", artifact.size))?;
            config.indent(&format!("SHA256: {}", artifact.sha256))?;
        }
    }
    Ok(())
}
