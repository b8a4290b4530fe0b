//! The linting orchestrator: runs every rule in a fixed order.

use target_lint_core::{
    FilesystemProbe, Issue, LintError, ProjectOptions, Script, SignatureProbe, Target,
};
use tracing::{debug, info};

/// Delegated linter for project-wide settings, invoked once per lint call.
pub trait SettingsLinter: Send + Sync {
    /// Lints the target's settings.
    ///
    /// # Errors
    ///
    /// A failure here aborts the whole lint call.
    fn lint_target(&self, target: &Target) -> Result<Vec<Issue>, LintError>;
}

/// Delegated linter for script phases, invoked once per script in
/// declaration order.
pub trait ScriptLinter: Send + Sync {
    /// Lints a single script phase.
    ///
    /// # Errors
    ///
    /// A failure here aborts the whole lint call.
    fn lint_script(&self, script: &Script) -> Result<Vec<Issue>, LintError>;
}

/// Settings linter that produces no issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSettingsLinter;

impl SettingsLinter for NoSettingsLinter {
    fn lint_target(&self, _target: &Target) -> Result<Vec<Issue>, LintError> {
        Ok(vec![])
    }
}

/// Script linter that produces no issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScriptLinter;

impl ScriptLinter for NoScriptLinter {
    fn lint_script(&self, _script: &Script) -> Result<Vec<Issue>, LintError> {
        Ok(vec![])
    }
}

/// Validates a target description before a generation pipeline consumes it.
///
/// The linter holds its collaborators and no other state; every call to
/// [`lint`](Self::lint) produces a fresh issue list and never mutates the
/// target. Rules run in a fixed order so the output is deterministic;
/// collaborator-bound checks are awaited in that same order.
pub struct TargetLinter<F, S, SL, PL> {
    filesystem: F,
    signatures: S,
    settings_linter: SL,
    script_linter: PL,
}

impl<F, S, SL, PL> TargetLinter<F, S, SL, PL>
where
    F: FilesystemProbe,
    S: SignatureProbe,
    SL: SettingsLinter,
    PL: ScriptLinter,
{
    /// Creates a linter from its four collaborators.
    pub fn new(filesystem: F, signatures: S, settings_linter: SL, script_linter: PL) -> Self {
        Self {
            filesystem,
            signatures,
            settings_linter,
            script_linter,
        }
    }

    /// Lints a target against the enclosing project's options.
    ///
    /// Returns every issue found, warnings and errors alike; the caller
    /// decides what blocks generation.
    ///
    /// # Errors
    ///
    /// Returns a [`LintError`] if any collaborator fails; no partial issue
    /// list is returned in that case.
    pub async fn lint(
        &self,
        target: &Target,
        options: &ProjectOptions,
    ) -> Result<Vec<Issue>, LintError> {
        debug!("Linting target '{}'", target.name);

        let mut issues = Vec::new();
        issues.extend(target_lint_rules::lint_product_name(target));
        issues.extend(target_lint_rules::lint_product_name_setting(target));
        issues.extend(target_lint_rules::lint_platform_product(target));
        issues.extend(target_lint_rules::lint_bundle_identifier(target));
        issues.extend(target_lint_rules::lint_copied_files(target));
        issues.extend(
            target_lint_rules::lint_referenced_files_exist(target, &self.filesystem).await?,
        );
        issues.extend(target_lint_rules::lint_library_resources(target, options));
        issues.extend(target_lint_rules::lint_deployment_targets(target));
        issues.extend(target_lint_rules::lint_duplicate_dependencies(target));
        issues.extend(
            target_lint_rules::lint_xcframework_signatures(target, &self.signatures).await?,
        );
        issues.extend(target_lint_rules::lint_source_codegen(target));
        issues.extend(target_lint_rules::lint_mergeable_library(target));
        issues.extend(target_lint_rules::lint_on_demand_resources(target));
        issues.extend(
            target_lint_rules::lint_core_data_models(target, &self.filesystem).await?,
        );

        issues.extend(self.settings_linter.lint_target(target)?);
        for script in &target.scripts {
            issues.extend(self.script_linter.lint_script(script)?);
        }

        info!(
            "Linted target '{}': {} issue(s)",
            target.name,
            issues.len()
        );
        Ok(issues)
    }
}
