//! Rule detecting tags assigned to both on-demand-resource categories.
//!
//! A tag in the initial-install set is downloaded with the app; listing it in
//! the prefetch order as well is redundant and ignored downstream.

use target_lint_core::{Issue, Target};

/// Warns once per tag present in both the initial-install set and the
/// prefetch order. Produces nothing when either collection is absent.
#[must_use]
pub fn lint_on_demand_resources(target: &Target) -> Vec<Issue> {
    let tags = &target.on_demand_resources_tags;
    let (Some(initial_install), Some(prefetch_order)) =
        (&tags.initial_install, &tags.prefetch_order)
    else {
        return vec![];
    };

    prefetch_order
        .iter()
        .filter(|tag| initial_install.contains(*tag))
        .map(|tag| {
            Issue::warning(format!(
                "The prefetched tag '{tag}' is already assigned to the initial-install category \
                 for target '{}' and will be ignored.",
                target.name
            ))
        })
        .collect()
}
