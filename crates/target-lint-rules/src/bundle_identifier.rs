//! Rule validating the bundle identifier character set.
//!
//! Build-variable interpolation (`${...}` and `$(...)`) is stripped before
//! validation: those segments are substituted at build time and cannot be
//! checked statically. Whatever remains must be a uniform type identifier.

use regex::Regex;
use std::sync::LazyLock;
use target_lint_core::{Issue, Target};

static BRACED_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap_or_else(|e| panic!("invalid regex: {e}")));

static PAREN_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\([^)]*\)").unwrap_or_else(|e| panic!("invalid regex: {e}")));

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '/')
}

/// Checks that the bundle identifier contains only allowed characters once
/// interpolation placeholders are stripped.
///
/// The whole identifier is scanned; the issue names the stripped identifier
/// rather than the first offending character.
#[must_use]
pub fn lint_bundle_identifier(target: &Target) -> Vec<Issue> {
    let stripped = BRACED_VARIABLE.replace_all(&target.bundle_id, "");
    let stripped = PAREN_VARIABLE.replace_all(&stripped, "");

    if stripped.chars().all(is_allowed) {
        return vec![];
    }

    vec![Issue::error(format!(
        "Invalid bundle identifier '{stripped}'. This string must contain only \
         alphanumeric (A-Z,a-z,0-9), hyphen (-), period (.), and slash (/) characters."
    ))]
}
