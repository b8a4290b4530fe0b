//! Rule for resource lists on products that cannot bundle them.
//!
//! Bare libraries carry resources only through synthesized bundle accessors.
//! With accessors disabled project-wide, declaring resources on a library is
//! unsatisfiable; with accessors enabled, the combination is left alone.

use target_lint_core::{Issue, ProjectOptions, Target};

/// Checks that a library target declaring resources does not rely on a
/// feature the project has disabled.
#[must_use]
pub fn lint_library_resources(target: &Target, options: &ProjectOptions) -> Vec<Issue> {
    if target.product.supports_resources()
        || target.resources.is_empty()
        || !options.disable_bundle_accessors
    {
        return vec![];
    }

    vec![Issue::error(format!(
        "Target '{}' cannot contain resources. Resources in {} products are not supported when \
         bundle accessors are disabled.",
        target.name, target.product
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use target_lint_core::ProductKind;

    fn library_with_resources(product: ProductKind) -> Target {
        Target::new("Lib", product, "com.acme.lib")
            .with_resources([PathBuf::from("Resources/strings.json")])
    }

    const DISABLED: ProjectOptions = ProjectOptions {
        disable_bundle_accessors: true,
    };

    #[test]
    fn static_library_with_resources_and_disabled_accessors_errors() {
        let issues = lint_library_resources(&library_with_resources(ProductKind::StaticLibrary), &DISABLED);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(issues[0].reason.contains("static library"));
    }

    #[test]
    fn dynamic_library_is_also_covered() {
        let issues = lint_library_resources(&library_with_resources(ProductKind::DynamicLibrary), &DISABLED);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn enabled_accessors_silence_the_rule() {
        let issues = lint_library_resources(
            &library_with_resources(ProductKind::StaticLibrary),
            &ProjectOptions::default(),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn resourceless_library_is_fine() {
        let target = Target::new("Lib", ProductKind::StaticLibrary, "com.acme.lib");
        assert!(lint_library_resources(&target, &DISABLED).is_empty());
    }

    #[test]
    fn bundle_capable_products_are_ignored() {
        let issues = lint_library_resources(&library_with_resources(ProductKind::Framework), &DISABLED);
        assert!(issues.is_empty());
    }
}
