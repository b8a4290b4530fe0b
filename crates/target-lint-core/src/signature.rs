//! Trust signatures for external binary artifacts.

use serde::{Deserialize, Serialize};

/// A trust assertion about a prebuilt binary artifact such as an XCFramework.
///
/// The shape set is closed: all variants are known statically and compared by
/// shape plus payload. "No signature" is a representable value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Signature {
    /// The artifact carries no signature and none is expected.
    Unsigned,
    /// Signed with an Apple Developer Program certificate.
    SignedWithAppleCertificate {
        /// Team identifier from the signing certificate.
        team_id: String,
        /// Team name from the signing certificate.
        team_name: String,
    },
    /// Self-signed; identified by the certificate's SHA-256 fingerprint.
    SelfSigned {
        /// Hex-encoded SHA-256 fingerprint.
        fingerprint: String,
    },
}

impl Signature {
    /// Renders the canonical textual form of this signature.
    ///
    /// Returns `None` for [`Signature::Unsigned`]; message formatting
    /// substitutes the literal marker `none` for an absent string.
    #[must_use]
    pub fn signature_string(&self) -> Option<String> {
        match self {
            Self::Unsigned => None,
            Self::SignedWithAppleCertificate { team_id, team_name } => {
                Some(format!("AppleDeveloperProgram:{team_id}:{team_name}"))
            }
            Self::SelfSigned { fingerprint } => Some(format!("SelfSigned:{fingerprint}")),
        }
    }
}
