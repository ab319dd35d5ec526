use albatross_release::release::{
    BuildVariant, FinalizeResult, HookOutcome, PackagingOutcome, ReleasePipeline,
    SettingsBuilder, SkipReason,
};
use std::{collections::HashMap, fs, path::Path};
use tempfile::TempDir;

fn release_dir(root: &Path) -> std::path::PathBuf {
    root.join("app/build/outputs/apk/release")
}

#[test]
fn default_output_dir_follows_module_layout() {
    let settings = SettingsBuilder::new()
        .project_root("/work/albatross")
        .build()
        .unwrap();
    assert_eq!(
        settings.output_dir(),
        Path::new("/work/albatross/app/build/outputs/apk/release")
    );
    assert_eq!(settings.variant(), BuildVariant::Release);

    let settings = SettingsBuilder::new()
        .project_root("/work/albatross")
        .module("manager")
        .build()
        .unwrap();
    assert!(settings.output_dir().starts_with("/work/albatross/manager"));
}

#[test]
fn project_root_is_required() {
    let err = SettingsBuilder::new().build().unwrap_err();
    assert!(err.to_string().contains("project_root"));
}

#[test]
fn debug_builds_get_no_signing_identity() {
    let dir = TempDir::new().unwrap();
    // Malformed on purpose: debug builds must not read it.
    fs::write(dir.path().join("local.properties"), "bad=\\u1\n").unwrap();

    let pipeline = ReleasePipeline::new(
        SettingsBuilder::new()
            .project_root(dir.path())
            .variant(BuildVariant::Debug)
            .build()
            .unwrap(),
    );
    assert_eq!(pipeline.signing_identity(&no_env()).unwrap(), None);
}

#[test]
fn release_builds_resolve_signing_identity() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("local.properties"), "RELEASE_KEY_ALIAS=albatross\n").unwrap();

    let pipeline = ReleasePipeline::new(
        SettingsBuilder::new()
            .project_root(dir.path())
            .build()
            .unwrap(),
    );
    let identity = pipeline
        .signing_identity(&no_env())
        .unwrap()
        .unwrap();
    assert_eq!(identity.key_alias(), Some("albatross"));
}

#[tokio::test]
async fn finalization_skipped_for_debug_builds() {
    let dir = TempDir::new().unwrap();
    let out = release_dir(dir.path());
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("app-release.apk"), b"apk").unwrap();

    let pipeline = ReleasePipeline::new(
        SettingsBuilder::new()
            .project_root(dir.path())
            .variant(BuildVariant::Debug)
            .build()
            .unwrap(),
    );
    let outcome = pipeline
        .after_packaging(PackagingOutcome::Succeeded)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        HookOutcome::Skipped(SkipReason::NotRelease {
            variant: BuildVariant::Debug
        })
    );
    assert!(out.join("app-release.apk").exists());
}

#[tokio::test]
async fn finalization_skipped_when_packaging_failed() {
    let dir = TempDir::new().unwrap();
    let out = release_dir(dir.path());
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("app-release-unsigned.apk"), b"apk").unwrap();

    let pipeline = ReleasePipeline::new(
        SettingsBuilder::new()
            .project_root(dir.path())
            .version_tag("1.0")
            .build()
            .unwrap(),
    );
    let outcome = pipeline
        .after_packaging(PackagingOutcome::Failed)
        .await
        .unwrap();

    assert_eq!(outcome, HookOutcome::Skipped(SkipReason::PackagingFailed));
    assert!(out.join("app-release-unsigned.apk").exists());
}

#[tokio::test]
async fn release_build_is_finalized_after_packaging() {
    let dir = TempDir::new().unwrap();
    let out = release_dir(dir.path());
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("app-release-unsigned.apk"), b"apk").unwrap();

    let pipeline = ReleasePipeline::new(
        SettingsBuilder::new()
            .project_root(dir.path())
            .version_tag("1.2.3")
            .build()
            .unwrap(),
    );
    let outcome = pipeline
        .after_packaging(PackagingOutcome::Succeeded)
        .await
        .unwrap();

    let HookOutcome::Ran(FinalizeResult::Finalized(artifact)) = outcome else {
        panic!("expected finalized artifact, got {outcome:?}");
    };
    assert_eq!(artifact.destination, out.join("AlbatrossManager-1.2.3.apk"));
    assert!(!out.join("app-release-unsigned.apk").exists());
}

#[tokio::test]
async fn release_finalization_requires_version_tag() {
    let dir = TempDir::new().unwrap();
    let pipeline = ReleasePipeline::new(
        SettingsBuilder::new()
            .project_root(dir.path())
            .build()
            .unwrap(),
    );

    let err = pipeline
        .after_packaging(PackagingOutcome::Succeeded)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("version tag"));
}

#[test]
fn variants_and_outcomes_parse_from_strings() {
    assert_eq!("release".parse::<BuildVariant>(), Ok(BuildVariant::Release));
    assert_eq!("Debug".parse::<BuildVariant>(), Ok(BuildVariant::Debug));
    assert!("staging".parse::<BuildVariant>().is_err());
    assert_eq!(
        "failed".parse::<PackagingOutcome>(),
        Ok(PackagingOutcome::Failed)
    );
}

fn no_env() -> HashMap<String, String> {
    HashMap::new()
}
