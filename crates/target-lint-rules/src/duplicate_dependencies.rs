//! Rule detecting dependencies declared more than once.
//!
//! Counting uses full structural equality (variant shape plus payload), so
//! two xcframework dependencies on the same path with different expected
//! signatures are distinct. First-seen order decides which occurrence's
//! labels end up in the warning and the order warnings are emitted in.

use target_lint_core::{Dependency, Issue, Target};

/// Warns once per distinct dependency value that occurs more than once.
#[must_use]
pub fn lint_duplicate_dependencies(target: &Target) -> Vec<Issue> {
    let mut seen: Vec<(&Dependency, usize)> = Vec::new();

    for dependency in &target.dependencies {
        match seen.iter_mut().find(|(existing, _)| *existing == dependency) {
            Some((_, count)) => *count += 1,
            None => seen.push((dependency, 1)),
        }
    }

    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(dependency, _)| {
            Issue::warning(format!(
                "Target '{}' has a duplicate {} dependency specified: '{}'.",
                target.name,
                dependency.kind_label(),
                dependency.display_name()
            ))
        })
        .collect()
}
