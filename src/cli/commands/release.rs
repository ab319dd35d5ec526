//! `release` command: credential resolution followed by the finalization hook.

use super::{finalize::print_result, resolve::print_summary, resolve_version};
use crate::{
    cli::{ReleaseArgs, RuntimeConfig},
    error::Result,
    metadata::VersionCatalog,
    release::{
        BuildVariant, HookOutcome, PackagingOutcome, ProcessEnvironment, ReleasePipeline,
        SettingsBuilder,
    },
};
use serde::Serialize;

#[derive(Serialize)]
struct ReleaseReport {
    variant: BuildVariant,
    signing: Option<crate::release::IdentitySummary>,
    finalize: HookOutcome,
}

pub async fn execute(args: &ReleaseArgs, config: &RuntimeConfig) -> Result<i32> {
    let finalizes =
        args.variant == BuildVariant::Release && args.packaging == PackagingOutcome::Succeeded;

    let mut builder = SettingsBuilder::new()
        .project_root(&args.project_root)
        .module(args.module.as_str())
        .variant(args.variant);
    if let Some(output_dir) = &args.output_dir {
        builder = builder.output_dir(output_dir);
    }
    if finalizes {
        let default_catalog = VersionCatalog::default_path(&args.project_root);
        builder = builder.version_tag(resolve_version(
            &args.version,
            Some(&default_catalog),
            config,
        )?);
    }
    let pipeline = ReleasePipeline::new(builder.build()?);

    let signing = pipeline
        .signing_identity(&ProcessEnvironment)?
        .map(|identity| identity.summary());
    let finalize = pipeline.after_packaging(args.packaging).await?;

    if args.json {
        let report = ReleaseReport {
            variant: args.variant,
            signing,
            finalize,
        };
        config.report(&serde_json::to_string_pretty(&report)?)?;
        return Ok(0);
    }

    match &signing {
        Some(summary) => print_summary(summary, config)?,
        None => config.verbose_println(&format!(
            "{} build: no signing identity required",
            args.variant
        ))?,
    }
    match &finalize {
        HookOutcome::Skipped(reason) => {
            config.verbose_println(&format!("Finalization skipped: {reason}"))?
        }
        HookOutcome::Ran(result) => print_result(result, config)?,
    }

    Ok(0)
}
