//! Rule restricting the mergeable flag to dynamic frameworks.

use target_lint_core::{Issue, ProductKind, Target};

/// Checks that only dynamic-framework targets are flagged mergeable.
#[must_use]
pub fn lint_mergeable_library(target: &Target) -> Vec<Issue> {
    if !target.mergeable || target.product == ProductKind::Framework {
        return vec![];
    }

    vec![Issue::error(format!(
        "Target '{}' cannot be mergeable: mergeability only applies to dynamic frameworks, not \
         to {} products.",
        target.name, target.product
    ))]
}
