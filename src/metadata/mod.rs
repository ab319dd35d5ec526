//! Version metadata from the Gradle version catalog.
//!
//! The release version name lives in `gradle/libs.versions.toml`:
//!
//! ```toml
//! [versions]
//! versionName = "1.2.3"
//! versionCode = 12
//! ```

use crate::release::{Error, Result};
use std::path::{Path, PathBuf};

/// Catalog location relative to the project root.
pub const DEFAULT_CATALOG_PATH: [&str; 2] = ["gradle", "libs.versions.toml"];

const VERSIONS_TABLE: &str = "versions";
const VERSION_NAME_KEY: &str = "versionName";
const VERSION_CODE_KEY: &str = "versionCode";

/// Parsed Gradle version catalog.
#[derive(Debug, Clone)]
pub struct VersionCatalog {
    path: PathBuf,
    table: toml::Table,
}

impl VersionCatalog {
    /// Default catalog path for a project root.
    pub fn default_path(project_root: &Path) -> PathBuf {
        DEFAULT_CATALOG_PATH
            .iter()
            .fold(project_root.to_path_buf(), |dir, part| dir.join(part))
    }

    /// Load the catalog (single read + parse).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::VersionCatalog {
            path: path.to_path_buf(),
            reason: format!("failed to read: {e}"),
        })?;

        Self::parse(path, &contents)
    }

    /// Parse catalog text; `path` is only used in error messages.
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents).map_err(|e| Error::VersionCatalog {
            path: path.to_path_buf(),
            reason: format!("failed to parse: {e}"),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            table,
        })
    }

    /// `[versions].versionName`, used as the release version tag.
    pub fn version_name(&self) -> Result<String> {
        match self.version_entry(VERSION_NAME_KEY)? {
            toml::Value::String(name) if !name.is_empty() => Ok(name.clone()),
            _ => Err(self.error(format!(
                "[{VERSIONS_TABLE}].{VERSION_NAME_KEY} must be a non-empty string"
            ))),
        }
    }

    /// `[versions].versionCode`, written either as an integer or a string.
    pub fn version_code(&self) -> Result<i64> {
        match self.version_entry(VERSION_CODE_KEY)? {
            toml::Value::Integer(code) => Ok(*code),
            toml::Value::String(code) => code.trim().parse().map_err(|_| {
                self.error(format!(
                    "[{VERSIONS_TABLE}].{VERSION_CODE_KEY} is not an integer: {code}"
                ))
            }),
            _ => Err(self.error(format!(
                "[{VERSIONS_TABLE}].{VERSION_CODE_KEY} must be an integer"
            ))),
        }
    }

    fn version_entry(&self, key: &str) -> Result<&toml::Value> {
        self.table
            .get(VERSIONS_TABLE)
            .and_then(|v| v.as_table())
            .and_then(|versions| versions.get(key))
            .ok_or_else(|| self.error(format!("missing [{VERSIONS_TABLE}].{key}")))
    }

    fn error(&self, reason: String) -> Error {
        Error::VersionCatalog {
            path: self.path.clone(),
            reason,
        }
    }
}
