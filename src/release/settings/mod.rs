//! Configuration for release preparation.
//!
//! Everything the credential resolver and artifact finalizer need is passed
//! in explicitly through [`Settings`], built with [`SettingsBuilder`]. Nothing
//! is read from ambient build-tool state.

mod builder;
mod core;

pub use builder::SettingsBuilder;
pub use self::core::Settings;

/// Module directory used when none is given.
pub const DEFAULT_MODULE: &str = "app";

/// Release APK output directory, relative to the module directory.
pub const RELEASE_OUTPUT_SUBDIR: [&str; 4] = ["build", "outputs", "apk", "release"];
