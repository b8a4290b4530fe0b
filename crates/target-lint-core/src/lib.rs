//! # target-lint-core
//!
//! Core types for target linting: the in-memory target model, the
//! [`Issue`]/[`Severity`] output unit, the [`LintError`] operational-failure
//! channel, and the collaborator traits rules reach outside the model with.
//!
//! No rule logic lives here; see `target-lint-rules` for the rules and
//! `target-lint` for the orchestrating entry point.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dependency;
mod error;
mod issue;
mod platform;
mod probe;
mod settings;
mod signature;
mod target;

pub use dependency::{Dependency, PackageKind, SdkStatus};
pub use error::LintError;
pub use issue::{Issue, Severity};
pub use platform::{DeploymentTargets, Destination, Platform};
pub use probe::{FilesystemProbe, LocalFilesystem, SignatureProbe};
pub use settings::{SettingValue, Settings};
pub use signature::Signature;
pub use target::{
    CoreDataModel, FileCodeGen, FileReference, OnDemandResourcesTags, ProductKind, ProjectOptions,
    Script, ScriptOrder, SourceFile, Target,
};
