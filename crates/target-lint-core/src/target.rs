//! The target model: the read-only input every rule operates on.

use crate::dependency::Dependency;
use crate::platform::{DeploymentTargets, Destination};
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Product kind of a buildable target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKind {
    /// An application.
    #[default]
    App,
    /// An App Clip.
    AppClip,
    /// An application extension.
    AppExtension,
    /// A dynamic framework.
    Framework,
    /// A static framework.
    StaticFramework,
    /// A dynamic library.
    DynamicLibrary,
    /// A static library.
    StaticLibrary,
    /// A resource bundle.
    Bundle,
    /// A command-line tool.
    CommandLineTool,
    /// A unit-test bundle.
    UnitTests,
    /// A UI-test bundle.
    UiTests,
    /// A watchOS application.
    WatchApp,
    /// A watchOS application extension.
    WatchExtension,
    /// A tvOS Top Shelf extension.
    TvTopShelfExtension,
    /// An iMessage extension.
    MessagesExtension,
    /// An XPC service.
    XpcService,
}

impl ProductKind {
    /// Whether this kind is a (static or dynamic) framework.
    #[must_use]
    pub fn is_framework(self) -> bool {
        matches!(self, Self::Framework | Self::StaticFramework)
    }

    /// Whether products of this kind can natively bundle resources.
    ///
    /// Bare libraries have no bundle to carry resources in; everything else
    /// either is a bundle or contains one.
    #[must_use]
    pub fn supports_resources(self) -> bool {
        !matches!(self, Self::DynamicLibrary | Self::StaticLibrary)
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::App => "app",
            Self::AppClip => "app clip",
            Self::AppExtension => "app extension",
            Self::Framework => "framework",
            Self::StaticFramework => "static framework",
            Self::DynamicLibrary => "dynamic library",
            Self::StaticLibrary => "static library",
            Self::Bundle => "bundle",
            Self::CommandLineTool => "command line tool",
            Self::UnitTests => "unit tests",
            Self::UiTests => "ui tests",
            Self::WatchApp => "watch app",
            Self::WatchExtension => "watch extension",
            Self::TvTopShelfExtension => "tv top shelf extension",
            Self::MessagesExtension => "messages extension",
            Self::XpcService => "xpc service",
        };
        write!(f, "{name}")
    }
}

/// Code-generation attribute a source file can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCodeGen {
    /// Generate code with public visibility.
    Public,
    /// Generate code with private visibility.
    Private,
    /// Generate code with project visibility.
    Project,
    /// Disable code generation for this file.
    Disabled,
}

/// A source file belonging to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path to the file.
    pub path: PathBuf,
    /// Optional code-generation attribute.
    pub code_gen: Option<FileCodeGen>,
}

impl SourceFile {
    /// Creates a source file with no code-generation attribute.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            code_gen: None,
        }
    }

    /// Sets the code-generation attribute.
    #[must_use]
    pub fn with_code_gen(mut self, code_gen: FileCodeGen) -> Self {
        self.code_gen = Some(code_gen);
        self
    }
}

/// A versioned Core Data model bundled with a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreDataModel {
    /// Path to the `.xcdatamodeld` container.
    pub path: PathBuf,
    /// Name of the version selected as current, without extension.
    pub current_version: String,
}

impl CoreDataModel {
    /// Creates a Core Data model reference.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, current_version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            current_version: current_version.into(),
        }
    }
}

/// Reference to a supporting file that may only resolve at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum FileReference {
    /// A literal path, checkable on disk.
    File(PathBuf),
    /// A build-setting variable such as `$(ENTITLEMENTS_FILE)`; resolution
    /// happens at build time, so existence checks skip it silently.
    Variable(String),
}

impl FileReference {
    /// The literal path, if this reference resolves statically.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Variable(_) => None,
        }
    }
}

/// When a script phase runs relative to compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptOrder {
    /// Before compilation.
    Pre,
    /// After compilation.
    Post,
}

/// A script phase attached to a target, lintable on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Display name of the phase.
    pub name: String,
    /// Whether the script runs before or after compilation.
    pub order: ScriptOrder,
    /// Shell contents of the phase.
    pub contents: String,
}

/// On-demand-resource tag assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnDemandResourcesTags {
    /// Tags downloaded with the initial install.
    pub initial_install: Option<BTreeSet<String>>,
    /// Tags prefetched after install, in priority order.
    pub prefetch_order: Option<Vec<String>>,
}

/// Project-wide options the engine consumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Whether synthesized bundle accessors are disabled for the project.
    pub disable_bundle_accessors: bool,
}

/// A single buildable unit within a project description.
///
/// Fully constructed by the caller before linting begins; rules only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Target name.
    pub name: String,
    /// Product kind.
    pub product: ProductKind,
    /// Product name, used for the built artifact.
    pub product_name: String,
    /// Bundle identifier; may contain `${...}` or `$(...)` interpolation.
    pub bundle_id: String,
    /// Destinations the target can run on.
    pub destinations: BTreeSet<Destination>,
    /// Deployment target versions per platform.
    pub deployment_targets: DeploymentTargets,
    /// Dependencies, in declaration order.
    pub dependencies: Vec<Dependency>,
    /// Source files.
    pub sources: Vec<SourceFile>,
    /// Resource file paths.
    pub resources: Vec<PathBuf>,
    /// Build settings.
    pub settings: Settings,
    /// Script phases, in declaration order.
    pub scripts: Vec<Script>,
    /// Entitlements file reference.
    pub entitlements: Option<FileReference>,
    /// Info.plist file reference.
    pub info_plist: Option<FileReference>,
    /// Core Data models.
    pub core_data_models: Vec<CoreDataModel>,
    /// On-demand-resource tag assignments.
    pub on_demand_resources_tags: OnDemandResourcesTags,
    /// Whether the target is built as a mergeable library.
    pub mergeable: bool,
}

impl Target {
    /// Creates a target with the given name, product kind, and bundle id.
    ///
    /// The product name defaults to the target name.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        product: ProductKind,
        bundle_id: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            product_name: name.clone(),
            name,
            product,
            bundle_id: bundle_id.into(),
            destinations: BTreeSet::from([Destination::Iphone]),
            ..Self::default()
        }
    }

    /// Replaces the product name.
    #[must_use]
    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = product_name.into();
        self
    }

    /// Replaces the destination set.
    #[must_use]
    pub fn with_destinations(mut self, destinations: impl IntoIterator<Item = Destination>) -> Self {
        self.destinations = destinations.into_iter().collect();
        self
    }

    /// Replaces the dependency list.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = Dependency>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    /// Replaces the resource list.
    #[must_use]
    pub fn with_resources(mut self, resources: impl IntoIterator<Item = PathBuf>) -> Self {
        self.resources = resources.into_iter().collect();
        self
    }
}
