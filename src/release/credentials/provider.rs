//! Ordered lookup layers for signing configuration.

use super::properties::PropertiesFile;
use std::collections::HashMap;

/// A single configuration layer that can answer `get(key)`.
pub trait LookupProvider {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Returns the raw value for `key`, if this layer has one.
    fn get(&self, key: &str) -> Option<String>;
}

/// Read access to environment variables.
///
/// Implemented for the real process environment and for plain maps so that
/// resolution can run against a controlled environment.
pub trait EnvironmentAccessor {
    /// Returns the value of variable `key`, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl EnvironmentAccessor for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvironmentAccessor for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvironmentAccessor + ?Sized> EnvironmentAccessor for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Layer backed by a parsed properties file, empty when the file is absent.
#[derive(Debug)]
pub struct PropertiesLayer {
    name: String,
    file: Option<PropertiesFile>,
}

impl PropertiesLayer {
    /// Creates the layer; `file` is `None` when the file does not exist.
    pub fn new(name: impl Into<String>, file: Option<PropertiesFile>) -> Self {
        Self {
            name: name.into(),
            file,
        }
    }
}

impl LookupProvider for PropertiesLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.file
            .as_ref()
            .and_then(|file| file.get(key))
            .map(str::to_owned)
    }
}

/// Layer backed by an [`EnvironmentAccessor`].
#[derive(Debug)]
pub struct EnvironmentLayer<E> {
    env: E,
}

impl<E: EnvironmentAccessor> EnvironmentLayer<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }
}

impl<E: EnvironmentAccessor> LookupProvider for EnvironmentLayer<E> {
    fn name(&self) -> &str {
        "environment"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}

/// A value found by [`LayeredLookup`] and the layer that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupHit {
    pub value: String,
    pub layer: String,
}

/// Providers consulted in order; the first non-empty value wins.
#[derive(Default)]
pub struct LayeredLookup<'a> {
    providers: Vec<Box<dyn LookupProvider + 'a>>,
}

impl<'a> LayeredLookup<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider with lower priority than those already added.
    pub fn with(mut self, provider: impl LookupProvider + 'a) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Looks `key` up in each layer in order. Empty values count as absent.
    pub fn lookup(&self, key: &str) -> Option<LookupHit> {
        self.providers.iter().find_map(|provider| {
            provider
                .get(key)
                .filter(|value| !value.is_empty())
                .map(|value| LookupHit {
                    value,
                    layer: provider.name().to_string(),
                })
        })
    }

    /// Names of the layers in lookup order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl std::fmt::Debug for LayeredLookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredLookup")
            .field("layers", &self.layer_names())
            .finish()
    }
}
