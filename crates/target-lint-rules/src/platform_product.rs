//! Rule for product kinds that are never valid on a platform.

use target_lint_core::{Issue, Platform, ProductKind, Target};

/// Product kinds that can never be built for the given platform.
fn forbidden_products(platform: Platform) -> &'static [ProductKind] {
    match platform {
        Platform::Ios => &[
            ProductKind::WatchApp,
            ProductKind::WatchExtension,
            ProductKind::TvTopShelfExtension,
        ],
        _ => &[],
    }
}

/// Checks the target's product kind against each destination platform's
/// forbidden set, returning on the first match.
#[must_use]
pub fn lint_platform_product(target: &Target) -> Vec<Issue> {
    for destination in &target.destinations {
        let platform = destination.platform();
        if forbidden_products(platform).contains(&target.product) {
            return vec![Issue::error(format!(
                "Target '{}' for platform {platform} cannot have the product type '{}'.",
                target.name, target.product
            ))];
        }
    }
    vec![]
}
