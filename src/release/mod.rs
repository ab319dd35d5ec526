//! Release preparation for the Albatross Manager APK.
//!
//! Two steps run around the external packaging toolchain:
//!
//! 1. [`CredentialResolver`] produces the [`SigningIdentity`] for the release
//!    signing step from `local.properties` and the environment.
//! 2. [`ArtifactFinalizer`] renames the packaged APK to
//!    `AlbatrossManager-<version>.apk` once packaging has finished.
//!
//! [`ReleasePipeline`] wires both to a [`Settings`] and gates them on the
//! build variant and packaging outcome.
//!
//! # Example
//!
//! ```no_run
//! use albatross_release::release::{
//!     PackagingOutcome, ProcessEnvironment, ReleasePipeline, SettingsBuilder,
//! };
//!
//! # async fn example() -> albatross_release::release::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_root(".")
//!     .version_tag("1.2.3")
//!     .build()?;
//! let pipeline = ReleasePipeline::new(settings);
//!
//! let identity = pipeline.signing_identity(&ProcessEnvironment)?;
//! // ... external packaging runs here ...
//! let outcome = pipeline.after_packaging(PackagingOutcome::Succeeded).await?;
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod credentials;
mod error;
pub mod pipeline;
pub mod settings;
pub mod utils;

pub use artifact::{
    ArtifactCandidate, ArtifactFinalizer, ArtifactNaming, CandidateList, FinalizeResult,
    FinalizedArtifact,
};
pub use credentials::{
    CredentialResolver, DEFAULT_STORE_FILE, EnvironmentAccessor, IdentitySummary,
    PROPERTIES_FILE_NAME, ProcessEnvironment, PropertiesFile, SigningIdentity, SigningKey,
};
pub use error::{Context, Error, ErrorExt, Result};
pub use pipeline::{BuildVariant, HookOutcome, PackagingOutcome, ReleasePipeline, SkipReason};
pub use settings::{Settings, SettingsBuilder};
