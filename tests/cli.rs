use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENV_VARS: [&str; 7] = [
    "RELEASE_STORE_FILE",
    "RELEASE_STORE_PASSWORD",
    "RELEASE_KEY_ALIAS",
    "RELEASE_KEY_PASSWORD",
    "ALBATROSS_PROJECT_ROOT",
    "ALBATROSS_OUTPUT_DIR",
    "ALBATROSS_VERSION_TAG",
];

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("albatross_release").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn resolve_never_prints_secrets() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("local.properties"),
        "RELEASE_STORE_PASSWORD=hunter2\nRELEASE_KEY_ALIAS=albatross\n",
    )
    .unwrap();

    cmd()
        .args(["resolve", "--json", "--project-root"])
        .arg(dir.path())
        .env("RELEASE_KEY_PASSWORD", "correct-horse")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"store_password_set\": true"))
        .stdout(predicate::str::contains("\"key_alias\": \"albatross\""))
        .stdout(predicate::str::contains("qing.jks"))
        .stdout(predicate::str::contains("hunter2").not())
        .stdout(predicate::str::contains("correct-horse").not());
}

#[test]
fn resolve_warns_about_missing_secrets() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["resolve", "--project-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Store password: not set"))
        .stderr(predicate::str::contains("RELEASE_STORE_PASSWORD"));
}

#[test]
fn resolve_fails_on_malformed_properties() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("local.properties"), "RELEASE_KEY_ALIAS=\\uXY\n").unwrap();

    cmd()
        .args(["resolve", "--project-root"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed properties file"))
        .stderr(predicate::str::contains("local.properties"));
}

#[test]
fn finalize_renames_artifact() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app-release-unsigned.apk"), b"apk-bytes").unwrap();

    cmd()
        .args(["finalize", "--version-tag", "1.2.3", "--output-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("AlbatrossManager-1.2.3.apk"));

    assert_eq!(
        fs::read(dir.path().join("AlbatrossManager-1.2.3.apk")).unwrap(),
        b"apk-bytes"
    );
    assert!(!dir.path().join("app-release-unsigned.apk").exists());
}

#[test]
fn finalize_missing_output_dir_succeeds() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["finalize", "--json", "--version-tag", "1.2.3", "--output-dir"])
        .arg(dir.path().join("missing"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"output_dir_missing\""));
}

#[test]
fn finalize_reads_version_from_catalog() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("app-release.apk"), b"signed").unwrap();

    cmd()
        .args([
            "finalize",
            "--version-catalog",
            "tests/fixtures/libs.versions.toml",
            "--output-dir",
        ])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("AlbatrossManager-1.2.3.apk").exists());
}

#[test]
fn finalize_without_version_source_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["finalize", "--output-dir"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--version-tag"));
}

#[test]
fn release_runs_resolution_and_finalization() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("app/build/outputs/apk/release");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("app-release.apk"), b"signed").unwrap();
    fs::create_dir_all(dir.path().join("gradle")).unwrap();
    fs::copy(
        "tests/fixtures/libs.versions.toml",
        dir.path().join("gradle/libs.versions.toml"),
    )
    .unwrap();

    cmd()
        .args(["release", "--json", "--project-root"])
        .arg(dir.path())
        .env("RELEASE_KEY_ALIAS", "albatross")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hook\": \"ran\""))
        .stdout(predicate::str::contains("\"status\": \"finalized\""))
        .stdout(predicate::str::contains("\"key_alias\": \"albatross\""));

    assert!(out.join("AlbatrossManager-1.2.3.apk").exists());
    assert!(!out.join("app-release.apk").exists());
}

#[test]
fn release_debug_variant_leaves_outputs_alone() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("app/build/outputs/apk/release");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("app-release.apk"), b"signed").unwrap();

    cmd()
        .args(["release", "--variant", "debug", "--json", "--project-root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hook\": \"skipped\""))
        .stdout(predicate::str::contains("\"signing\": null"));

    assert!(out.join("app-release.apk").exists());
}

#[test]
fn invalid_variant_is_rejected() {
    cmd()
        .args(["release", "--variant", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid build variant"));
}
