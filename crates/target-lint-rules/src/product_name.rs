//! Rule validating the product name character set.
//!
//! Frameworks are stricter than other products: a framework's product name
//! becomes its module name, so `.` and `-` are not representable there.

use target_lint_core::{Issue, Target};

/// Checks the product name against the character set allowed for the
/// target's product kind.
#[must_use]
pub fn lint_product_name(target: &Target) -> Vec<Issue> {
    let extras_allowed = !target.product.is_framework();

    let allowed = |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || (extras_allowed && matches!(c, '.' | '-'))
    };

    if target.product_name.chars().all(allowed) {
        return vec![];
    }

    let allowed_description = if extras_allowed {
        "alphanumeric (A-Z,a-z,0-9), underscore (_), period (.), and hyphen (-)"
    } else {
        "alphanumeric (A-Z,a-z,0-9) and underscore (_)"
    };

    vec![Issue::warning(format!(
        "Invalid product name '{}'. This string must contain only {} characters.",
        target.product_name, allowed_description
    ))]
}
