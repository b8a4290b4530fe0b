//! # target-lint-rules
//!
//! Built-in validation rules for target linting.
//!
//! Every rule is an independent function over the read-only target model that
//! produces zero or more [`Issue`]s. Rules that need to look outside the
//! model take a collaborator trait and return `Result`, so a probe failure
//! aborts instead of reading as "no problem found".
//!
//! ## Rules
//!
//! | Function | Checks | Severity |
//! |----------|--------|----------|
//! | `lint_product_name` | Product name character set per product kind | warning |
//! | `lint_product_name_setting` | `PRODUCT_NAME` override consistency | warning |
//! | `lint_platform_product` | Product kinds forbidden on a platform | error |
//! | `lint_bundle_identifier` | Bundle identifier character set | error |
//! | `lint_copied_files` | Supporting files copied as plain resources | warning |
//! | `lint_referenced_files_exist` | Declared Info.plist/entitlements exist | error |
//! | `lint_library_resources` | Resources on library products | error |
//! | `lint_deployment_targets` | Version format and destination consistency | error |
//! | `lint_duplicate_dependencies` | Dependencies declared more than once | warning |
//! | `lint_xcframework_signatures` | XCFramework signature expectations | error |
//! | `lint_source_codegen` | Code-generation attributes on unsupported files | warning |
//! | `lint_mergeable_library` | Mergeable flag on non-dynamic products | error |
//! | `lint_on_demand_resources` | Overlapping on-demand-resource tags | warning |
//! | `lint_core_data_models` | Core Data model and current-version existence | error |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bundle_identifier;
mod copied_files;
mod core_data_models;
mod deployment_target;
mod duplicate_dependencies;
mod library_resources;
mod mergeable_library;
mod on_demand_resources;
mod platform_product;
mod product_name;
mod product_name_setting;
mod source_codegen;
mod xcframework_signature;

pub use bundle_identifier::lint_bundle_identifier;
pub use copied_files::{lint_copied_files, lint_referenced_files_exist};
pub use core_data_models::lint_core_data_models;
pub use deployment_target::lint_deployment_targets;
pub use duplicate_dependencies::lint_duplicate_dependencies;
pub use library_resources::lint_library_resources;
pub use mergeable_library::lint_mergeable_library;
pub use on_demand_resources::lint_on_demand_resources;
pub use platform_product::lint_platform_product;
pub use product_name::lint_product_name;
pub use product_name_setting::lint_product_name_setting;
pub use source_codegen::lint_source_codegen;
pub use xcframework_signature::lint_xcframework_signatures;

/// Re-export core types for convenience.
pub use target_lint_core::{Issue, LintError, Severity, Target};
