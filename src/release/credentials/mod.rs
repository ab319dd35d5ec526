//! Signing credential resolution.
//!
//! Produces the [`SigningIdentity`] handed to the release signing step. Each
//! of the four well-known keys is looked up in `local.properties` at the
//! project root first, then in the process environment. The keystore file
//! name falls back to [`DEFAULT_STORE_FILE`]; the secrets stay unset when no
//! layer provides them, and the signing step rejects them later.
//!
//! # Example
//!
//! ```no_run
//! use albatross_release::release::{CredentialResolver, ProcessEnvironment};
//! use std::path::Path;
//!
//! # fn example() -> albatross_release::release::Result<()> {
//! let identity = CredentialResolver::new().resolve(Path::new("."), &ProcessEnvironment)?;
//! println!("keystore: {}", identity.store_file().display());
//! # Ok(())
//! # }
//! ```

mod properties;
mod provider;

pub use properties::{PropertiesFile, SyntaxError};
pub use provider::{
    EnvironmentAccessor, EnvironmentLayer, LayeredLookup, LookupHit, LookupProvider,
    ProcessEnvironment, PropertiesLayer,
};

use crate::release::{Result, Settings};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Properties file read from the project root.
pub const PROPERTIES_FILE_NAME: &str = "local.properties";

/// Keystore file name used when no layer names one.
pub const DEFAULT_STORE_FILE: &str = "qing.jks";

/// The configuration keys that make up a signing identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SigningKey {
    #[serde(rename = "RELEASE_STORE_FILE")]
    StoreFile,
    #[serde(rename = "RELEASE_STORE_PASSWORD")]
    StorePassword,
    #[serde(rename = "RELEASE_KEY_ALIAS")]
    KeyAlias,
    #[serde(rename = "RELEASE_KEY_PASSWORD")]
    KeyPassword,
}

impl SigningKey {
    /// All keys in resolution order.
    pub const ALL: [SigningKey; 4] = [
        SigningKey::StoreFile,
        SigningKey::StorePassword,
        SigningKey::KeyAlias,
        SigningKey::KeyPassword,
    ];

    /// Name used both in `local.properties` and as environment variable.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StoreFile => "RELEASE_STORE_FILE",
            Self::StorePassword => "RELEASE_STORE_PASSWORD",
            Self::KeyAlias => "RELEASE_KEY_ALIAS",
            Self::KeyPassword => "RELEASE_KEY_PASSWORD",
        }
    }
}

impl std::fmt::Display for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keystore location and credentials for signing a release build.
///
/// Immutable once resolved. `Debug` never prints the passwords.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningIdentity {
    store_file: PathBuf,
    store_password: Option<String>,
    key_alias: Option<String>,
    key_password: Option<String>,
}

impl SigningIdentity {
    pub fn new(
        store_file: PathBuf,
        store_password: Option<String>,
        key_alias: Option<String>,
        key_password: Option<String>,
    ) -> Self {
        Self {
            store_file,
            store_password,
            key_alias,
            key_password,
        }
    }

    /// Keystore path, always resolved.
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn store_password(&self) -> Option<&str> {
        self.store_password.as_deref()
    }

    pub fn key_alias(&self) -> Option<&str> {
        self.key_alias.as_deref()
    }

    pub fn key_password(&self) -> Option<&str> {
        self.key_password.as_deref()
    }

    /// Keys that no layer provided. The store file is never missing.
    pub fn missing_secrets(&self) -> Vec<SigningKey> {
        [
            (SigningKey::StorePassword, self.store_password.is_none()),
            (SigningKey::KeyAlias, self.key_alias.is_none()),
            (SigningKey::KeyPassword, self.key_password.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, missing)| missing.then_some(key))
        .collect()
    }

    /// Redacted view safe to log or print.
    pub fn summary(&self) -> IdentitySummary {
        IdentitySummary {
            store_file: self.store_file.clone(),
            store_password_set: self.store_password.is_some(),
            key_alias: self.key_alias.clone(),
            key_password_set: self.key_password.is_some(),
            missing: self.missing_secrets(),
        }
    }
}

impl std::fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");
        f.debug_struct("SigningIdentity")
            .field("store_file", &self.store_file)
            .field("store_password", &redact(&self.store_password))
            .field("key_alias", &self.key_alias)
            .field("key_password", &redact(&self.key_password))
            .finish()
    }
}

/// Presence-only description of a [`SigningIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentitySummary {
    pub store_file: PathBuf,
    pub store_password_set: bool,
    pub key_alias: Option<String>,
    pub key_password_set: bool,
    pub missing: Vec<SigningKey>,
}

/// Resolves a [`SigningIdentity`] from `local.properties` and the environment.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    properties_file_name: String,
    default_store_file: String,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self {
            properties_file_name: PROPERTIES_FILE_NAME.to_string(),
            default_store_file: DEFAULT_STORE_FILE.to_string(),
        }
    }
}

impl CredentialResolver {
    /// Resolver with the standard file names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver using the file names configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            properties_file_name: settings.properties_file_name().to_string(),
            default_store_file: settings.default_store_file().to_string(),
        }
    }

    /// Resolves the signing identity for the project at `project_root`.
    ///
    /// A missing properties file is not an error. A malformed one is
    /// [`Error::ConfigParse`](crate::release::Error::ConfigParse). Unset
    /// secrets are left as `None`.
    pub fn resolve<E: EnvironmentAccessor>(
        &self,
        project_root: &Path,
        env: &E,
    ) -> Result<SigningIdentity> {
        let properties_path = project_root.join(&self.properties_file_name);
        let properties = PropertiesFile::load(&properties_path)?;
        match &properties {
            Some(file) => log::debug!(
                "Loaded {} entries from {}",
                file.len(),
                properties_path.display()
            ),
            None => log::debug!(
                "{} not found, relying on environment variables",
                properties_path.display()
            ),
        }

        let lookup = LayeredLookup::new()
            .with(PropertiesLayer::new(
                self.properties_file_name.clone(),
                properties,
            ))
            .with(EnvironmentLayer::new(env));

        let store_name = lookup_key(&lookup, SigningKey::StoreFile).unwrap_or_else(|| {
            log::debug!(
                "{} not set, using default {}",
                SigningKey::StoreFile,
                self.default_store_file
            );
            self.default_store_file.clone()
        });

        // The keystore lives one level above the project root.
        let identity = SigningIdentity::new(
            project_root.join("..").join(store_name),
            lookup_key(&lookup, SigningKey::StorePassword),
            lookup_key(&lookup, SigningKey::KeyAlias),
            lookup_key(&lookup, SigningKey::KeyPassword),
        );

        let missing = identity.missing_secrets();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|k| k.as_str()).collect();
            log::warn!(
                "Signing secrets not set in any layer: {} (release signing will fail)",
                names.join(", ")
            );
        }

        Ok(identity)
    }
}

/// Resolves with the standard file names.
pub fn resolve<E: EnvironmentAccessor>(project_root: &Path, env: &E) -> Result<SigningIdentity> {
    CredentialResolver::new().resolve(project_root, env)
}

fn lookup_key(lookup: &LayeredLookup<'_>, key: SigningKey) -> Option<String> {
    match lookup.lookup(key.as_str()) {
        Some(hit) => {
            log::debug!("{} resolved from {}", key, hit.layer);
            Some(hit.value)
        }
        None => {
            log::debug!("{} not set", key);
            None
        }
    }
}
