//! Rule checking that declared Core Data models exist on disk.

use target_lint_core::{FilesystemProbe, Issue, LintError, Target};

/// Checks, per Core Data model, that the model container exists and that it
/// contains the `.xcdatamodel` file named by the model's current version.
///
/// The two checks are independent: a model can fail both.
///
/// # Errors
///
/// Propagates probe failures immediately.
pub async fn lint_core_data_models<F: FilesystemProbe>(
    target: &Target,
    filesystem: &F,
) -> Result<Vec<Issue>, LintError> {
    let mut issues = Vec::new();

    for model in &target.core_data_models {
        if !filesystem.exists(&model.path).await? {
            issues.push(Issue::error(format!(
                "The Core Data model at path {} does not exist.",
                model.path.display()
            )));
        }

        let version_path = model.path.join(format!("{}.xcdatamodel", model.current_version));
        if !filesystem.exists(&version_path).await? {
            issues.push(Issue::error(format!(
                "The current version of the Core Data model at path {} does not exist. \
                 There should be a file at {}.",
                model.path.display(),
                version_path.display()
            )));
        }
    }

    Ok(issues)
}
