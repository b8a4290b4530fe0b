//! Target dependency variants.

use crate::signature::Signature;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Linkage of a Swift package product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Linked into the product at runtime.
    Runtime,
    /// Build-tool plugin.
    Plugin,
    /// Swift macro.
    Macro,
}

/// Whether a system SDK is required or optionally linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdkStatus {
    /// Linked with `-framework`.
    Required,
    /// Linked with `-weak_framework`.
    Optional,
}

/// A dependency of a target.
///
/// The variant set is closed; rules match on it exhaustively. The two
/// projections [`kind_label`](Self::kind_label) and
/// [`display_name`](Self::display_name) exist only for issue text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Dependency {
    /// Another target in the same project.
    Target {
        /// Name of the depended-on target.
        name: String,
    },
    /// A target in another project.
    Project {
        /// Name of the depended-on target.
        target: String,
        /// Path to the other project.
        path: PathBuf,
    },
    /// A prebuilt framework on disk.
    Framework {
        /// Path to the `.framework` bundle.
        path: PathBuf,
    },
    /// A prebuilt multi-platform binary artifact.
    Xcframework {
        /// Path to the `.xcframework` bundle.
        path: PathBuf,
        /// Signature the artifact is expected to carry. `None` means the
        /// signature rule does not apply to this dependency.
        expected_signature: Option<Signature>,
    },
    /// A static or dynamic library on disk.
    Library {
        /// Path to the library binary.
        path: PathBuf,
    },
    /// A Swift package product.
    Package {
        /// Product name within the package.
        product: String,
        /// How the product is linked.
        linkage: PackageKind,
    },
    /// A system SDK framework or library, by name.
    Sdk {
        /// SDK name, e.g. `CoreData.framework`.
        name: String,
        /// Required or weak linking.
        status: SdkStatus,
    },
    /// The XCTest framework from the active toolchain.
    Xctest,
}

impl Dependency {
    /// Human-readable type label for issue text.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Target { .. } => "target",
            Self::Project { .. } => "project",
            Self::Framework { .. } => "framework",
            Self::Xcframework { .. } => "xcframework",
            Self::Library { .. } => "library",
            Self::Package { .. } => "package",
            Self::Sdk { .. } => "sdk",
            Self::Xctest => "xctest",
        }
    }

    /// Display name for issue text.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Target { name } => name.clone(),
            Self::Project { target, .. } => target.clone(),
            Self::Framework { path }
            | Self::Xcframework { path, .. }
            | Self::Library { path } => path.display().to_string(),
            Self::Package { product, .. } => product.clone(),
            Self::Sdk { name, .. } => name.clone(),
            Self::Xctest => "XCTest".to_string(),
        }
    }
}
