//! Rule for code-generation attributes on unsupported file types.

use target_lint_core::{Issue, Target};

/// File extensions for which a code-generation attribute is meaningful.
const CODEGEN_EXTENSIONS: &[&str] = &["intentdefinition", "mlmodel"];

/// Warns about source files that request code generation but whose extension
/// is outside the allow-list.
#[must_use]
pub fn lint_source_codegen(target: &Target) -> Vec<Issue> {
    target
        .sources
        .iter()
        .filter(|source| source.code_gen.is_some())
        .filter(|source| {
            !source
                .path
                .extension()
                .and_then(|extension| extension.to_str())
                .is_some_and(|extension| CODEGEN_EXTENSIONS.contains(&extension))
        })
        .map(|source| {
            Issue::warning(format!(
                "Source file at path {} has a code generation attribute, which only applies to \
                 files with extensions: {}.",
                source.path.display(),
                CODEGEN_EXTENSIONS.join(", ")
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use target_lint_core::{FileCodeGen, ProductKind, SourceFile};

    fn target_with_sources(sources: Vec<SourceFile>) -> Target {
        let mut target = Target::new("App", ProductKind::App, "com.acme.app");
        target.sources = sources;
        target
    }

    #[test]
    fn allow_listed_extensions_accept_the_attribute() {
        let target = target_with_sources(vec![
            SourceFile::new("Intents/Order.intentdefinition").with_code_gen(FileCodeGen::Public),
            SourceFile::new("Models/Classifier.mlmodel").with_code_gen(FileCodeGen::Private),
        ]);
        assert!(lint_source_codegen(&target).is_empty());
    }

    #[test]
    fn swift_file_with_attribute_warns() {
        let target = target_with_sources(vec![
            SourceFile::new("Sources/Main.swift").with_code_gen(FileCodeGen::Project),
        ]);
        let issues = lint_source_codegen(&target);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].reason.contains("Sources/Main.swift"));
        assert!(issues[0].reason.contains("intentdefinition, mlmodel"));
    }

    #[test]
    fn files_without_attribute_are_ignored() {
        let target = target_with_sources(vec![SourceFile::new("Sources/Main.swift")]);
        assert!(lint_source_codegen(&target).is_empty());
    }

    #[test]
    fn extensionless_file_with_attribute_warns() {
        let target = target_with_sources(vec![
            SourceFile::new("Sources/Makefile").with_code_gen(FileCodeGen::Disabled),
        ]);
        assert_eq!(lint_source_codegen(&target).len(), 1);
    }
}
