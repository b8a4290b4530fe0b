//! # target-lint
//!
//! Pre-flight validation of build target descriptions.
//!
//! Given an in-memory [`Target`] model and the enclosing project's
//! [`ProjectOptions`], [`TargetLinter::lint`] runs a fixed, ordered set of
//! validation rules and returns every finding as an [`Issue`] with a
//! severity. It catches semantic errors a downstream build tool would
//! otherwise fail on much later: malformed identifiers, missing supporting
//! files, impossible platform/product combinations, tampered binary
//! dependencies.
//!
//! The engine classifies validity only. It never mutates the model, never
//! resolves dependency graphs, and never decides whether generation should
//! abort; callers typically halt on any error-severity issue and display
//! warnings.
//!
//! ## Example
//!
//! ```ignore
//! use target_lint::{NoScriptLinter, NoSettingsLinter, TargetLinter};
//! use target_lint_core::{LocalFilesystem, ProjectOptions};
//!
//! let linter = TargetLinter::new(LocalFilesystem, my_signature_probe,
//!     NoSettingsLinter, NoScriptLinter);
//! let issues = linter.lint(&target, &ProjectOptions::default()).await?;
//! if issues.iter().any(|issue| issue.is_error()) {
//!     // halt generation
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod linter;

pub use linter::{NoScriptLinter, NoSettingsLinter, ScriptLinter, SettingsLinter, TargetLinter};

/// Re-export of the model and output types consumers need.
pub use target_lint_core::{
    Dependency, DeploymentTargets, Destination, FileReference, FilesystemProbe, Issue, LintError,
    LocalFilesystem, Platform, ProductKind, ProjectOptions, Script, ScriptOrder, Severity,
    Signature, SignatureProbe, Target,
};
