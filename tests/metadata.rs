use albatross_release::{metadata::VersionCatalog, release::Error};
use std::path::Path;

#[test]
fn reads_version_name_and_code_from_catalog() {
    let catalog = VersionCatalog::load(Path::new("tests/fixtures/libs.versions.toml")).unwrap();
    assert_eq!(catalog.version_name().unwrap(), "1.2.3");
    assert_eq!(catalog.version_code().unwrap(), 12);
}

#[test]
fn integer_version_code_is_accepted() {
    let catalog = VersionCatalog::parse(
        Path::new("libs.versions.toml"),
        "[versions]\nversionName = \"2.0\"\nversionCode = 20\n",
    )
    .unwrap();
    assert_eq!(catalog.version_code().unwrap(), 20);
}

#[test]
fn missing_version_name_is_reported() {
    let catalog =
        VersionCatalog::parse(Path::new("libs.versions.toml"), "[versions]\nminSdk = \"24\"\n")
            .unwrap();
    let err = catalog.version_name().unwrap_err();
    assert!(matches!(err, Error::VersionCatalog { .. }));
    assert!(err.to_string().contains("versionName"));
}

#[test]
fn missing_catalog_file_is_reported() {
    let err = VersionCatalog::load(Path::new("tests/fixtures/does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, Error::VersionCatalog { .. }));
}

#[test]
fn default_path_is_under_gradle_dir() {
    assert_eq!(
        VersionCatalog::default_path(Path::new("/work/albatross")),
        Path::new("/work/albatross/gradle/libs.versions.toml")
    );
}
