//! Rule checking `PRODUCT_NAME` build-setting overrides for consistency.
//!
//! Only literal string values participate; list values and unset
//! configurations are ignored. The two checks are independent and can both
//! fire for the same target.

use std::collections::BTreeSet;
use target_lint_core::{Issue, SettingValue, Target};

const PRODUCT_NAME: &str = "PRODUCT_NAME";

/// Checks that a `PRODUCT_NAME` override neither varies across
/// configurations nor depends on build-time variable substitution.
#[must_use]
pub fn lint_product_name_setting(target: &Target) -> Vec<Issue> {
    let mut values: BTreeSet<&str> = BTreeSet::new();

    if let Some(value) = target.settings.base.get(PRODUCT_NAME).and_then(SettingValue::as_str) {
        values.insert(value);
    }
    for overrides in target.settings.configurations.values().flatten() {
        if let Some(value) = overrides.get(PRODUCT_NAME).and_then(SettingValue::as_str) {
            values.insert(value);
        }
    }

    let mut issues = Vec::new();

    if values.len() > 1 {
        issues.push(Issue::warning(format!(
            "The target '{}' has a PRODUCT_NAME build setting that varies across configurations, \
             which can lead to unexpected product paths.",
            target.name
        )));
    }

    if values.iter().any(|value| value.contains('$')) {
        issues.push(Issue::warning(format!(
            "The target '{}' has a PRODUCT_NAME build setting containing variables that are \
             resolved at build time and cannot be checked statically.",
            target.name
        )));
    }

    issues
}
