//! Collaborator traits for rules that need to look outside the model.
//!
//! These are the only suspension points in a lint call. A probe failing to
//! answer is a [`LintError`], never an issue.

use crate::error::LintError;
use crate::signature::Signature;
use async_trait::async_trait;
use std::path::Path;

/// Answers "does this path exist", usable concurrently.
#[async_trait]
pub trait FilesystemProbe: Send + Sync {
    /// Returns whether `path` exists.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Io`] if existence cannot be determined.
    async fn exists(&self, path: &Path) -> Result<bool, LintError>;
}

/// Extracts the trust signature of a binary artifact.
#[async_trait]
pub trait SignatureProbe: Send + Sync {
    /// Returns the signature of the artifact at `path`.
    ///
    /// An artifact carrying no signature yields [`Signature::Unsigned`];
    /// only an unreadable or corrupt artifact is an error.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Signature`] if the artifact cannot be read.
    async fn signature_of(&self, path: &Path) -> Result<Signature, LintError>;
}

/// Production [`FilesystemProbe`] backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

#[async_trait]
impl FilesystemProbe for LocalFilesystem {
    async fn exists(&self, path: &Path) -> Result<bool, LintError> {
        tokio::fs::try_exists(path)
            .await
            .map_err(|source| LintError::io(path, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_filesystem_reports_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("Info.plist");
        std::fs::write(&file, "<plist/>").expect("write");

        let probe = LocalFilesystem;
        assert!(probe.exists(&file).await.expect("probe"));
        assert!(!probe
            .exists(&dir.path().join("missing.plist"))
            .await
            .expect("probe"));
    }
}
