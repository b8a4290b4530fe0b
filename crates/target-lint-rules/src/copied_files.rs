//! Rules for supporting files: copied resources and missing references.
//!
//! Two concerns share this module. Copied-file warnings are pure checks over
//! the resource list; the existence checks for declared Info.plist and
//! entitlements references go through the filesystem probe and can fail.

use std::path::Path;
use target_lint_core::{FileReference, FilesystemProbe, Issue, LintError, Target};

/// Warns about supporting files that are listed as plain copied resources.
///
/// The target's own Info.plist bundled as a resource produces one warning;
/// every resource path containing `.entitlements` produces one warning.
#[must_use]
pub fn lint_copied_files(target: &Target) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(info_plist_path) = target.info_plist.as_ref().and_then(FileReference::path) {
        if target.resources.iter().any(|resource| resource == info_plist_path) {
            issues.push(Issue::warning(format!(
                "The Info.plist at path {} is being copied into the target '{}' product as a \
                 plain resource.",
                info_plist_path.display(),
                target.name
            )));
        }
    }

    for resource in &target.resources {
        if resource.to_string_lossy().contains(".entitlements") {
            issues.push(Issue::warning(format!(
                "The entitlements file at path {} is being copied into the target '{}' product \
                 as a plain resource.",
                resource.display(),
                target.name
            )));
        }
    }

    issues
}

/// Checks that declared Info.plist and entitlements references exist on disk.
///
/// References that only resolve at build time are skipped silently.
///
/// # Errors
///
/// Propagates probe failures; no partial issues are returned in that case.
pub async fn lint_referenced_files_exist<F: FilesystemProbe>(
    target: &Target,
    filesystem: &F,
) -> Result<Vec<Issue>, LintError> {
    let mut issues = Vec::new();

    if let Some(path) = target.info_plist.as_ref().and_then(FileReference::path) {
        if !filesystem.exists(path).await? {
            issues.push(missing_file_issue("Info.plist", path));
        }
    }
    if let Some(path) = target.entitlements.as_ref().and_then(FileReference::path) {
        if !filesystem.exists(path).await? {
            issues.push(missing_file_issue("entitlements", path));
        }
    }

    Ok(issues)
}

fn missing_file_issue(kind: &str, path: &Path) -> Issue {
    Issue::error(format!(
        "The {kind} file was not found at path {}.",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use target_lint_core::{LocalFilesystem, ProductKind, Severity};

    fn app() -> Target {
        Target::new("App", ProductKind::App, "com.acme.app")
    }

    #[test]
    fn info_plist_copied_as_resource_warns() {
        let mut target = app().with_resources([PathBuf::from("App/Info.plist")]);
        target.info_plist = Some(FileReference::File(PathBuf::from("App/Info.plist")));

        let issues = lint_copied_files(&target);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].reason.contains("App/Info.plist"));
    }

    #[test]
    fn unrelated_info_plist_resource_does_not_warn() {
        let mut target = app().with_resources([PathBuf::from("Other/Info.plist")]);
        target.info_plist = Some(FileReference::File(PathBuf::from("App/Info.plist")));
        assert!(lint_copied_files(&target).is_empty());
    }

    #[test]
    fn each_entitlements_resource_warns() {
        let target = app().with_resources([
            PathBuf::from("App/App.entitlements"),
            PathBuf::from("App/Debug.entitlements"),
            PathBuf::from("App/logo.png"),
        ]);
        let issues = lint_copied_files(&target);
        assert_eq!(issues.len(), 2);
    }

    #[tokio::test]
    async fn missing_references_error_per_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut target = app();
        target.info_plist = Some(FileReference::File(dir.path().join("Info.plist")));
        target.entitlements = Some(FileReference::File(dir.path().join("App.entitlements")));

        let issues = lint_referenced_files_exist(&target, &LocalFilesystem)
            .await
            .expect("lint");
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(Issue::is_error));
    }

    #[tokio::test]
    async fn existing_references_produce_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let plist = dir.path().join("Info.plist");
        std::fs::write(&plist, "<plist/>").expect("write");

        let mut target = app();
        target.info_plist = Some(FileReference::File(plist));

        let issues = lint_referenced_files_exist(&target, &LocalFilesystem)
            .await
            .expect("lint");
        assert!(issues.is_empty());
    }

    #[tokio::test]
    async fn variable_references_are_skipped() {
        let mut target = app();
        target.entitlements = Some(FileReference::Variable("$(ENTITLEMENTS_FILE)".into()));

        let issues = lint_referenced_files_exist(&target, &LocalFilesystem)
            .await
            .expect("lint");
        assert!(issues.is_empty());
    }
}
