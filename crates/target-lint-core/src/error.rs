//! Operational failures raised by collaborators.
//!
//! Findings are [`Issue`](crate::Issue) values and are always returned, never
//! thrown. `LintError` is the other channel: a collaborator being unable to
//! complete its operation. It aborts the whole lint call and is never
//! downgraded to an issue, because an inability to determine ground truth
//! must not read as "no problem found".

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a lint call.
#[derive(Debug, Error)]
pub enum LintError {
    /// I/O error while probing a path on disk.
    #[error("I/O error while probing {path}: {source}")]
    Io {
        /// Path the probe was asked about.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The signature of a binary artifact could not be read or parsed.
    #[error("failed to read the signature of {path}: {message}")]
    Signature {
        /// Path to the artifact.
        path: PathBuf,
        /// Probe-supplied description of the failure.
        message: String,
    },

    /// A delegated linter failed.
    #[error("delegated linter failed: {0}")]
    Delegate(String),
}

impl LintError {
    /// Wraps an I/O error with the path that was being probed.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a signature-probe failure for the given artifact.
    #[must_use]
    pub fn signature(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Signature {
            path: path.into(),
            message: message.into(),
        }
    }
}
