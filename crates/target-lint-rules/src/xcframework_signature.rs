//! Rule verifying XCFramework signatures against declared expectations.
//!
//! The only rule in the engine that compares cryptographic material. It is
//! fail-closed: a mismatch is always an error, because a tampered or stale
//! binary artifact is a security concern rather than a style concern.

use target_lint_core::{Dependency, Issue, LintError, Signature, SignatureProbe, Target};

const NO_SIGNATURE: &str = "none";

/// Checks every xcframework dependency carrying an expected signature
/// against the signature the probe reads from the artifact.
///
/// Dependencies without an expected signature are not checked at all.
///
/// # Errors
///
/// Propagates probe failures for unreadable artifacts.
pub async fn lint_xcframework_signatures<S: SignatureProbe>(
    target: &Target,
    probe: &S,
) -> Result<Vec<Issue>, LintError> {
    let mut issues = Vec::new();

    for dependency in &target.dependencies {
        let Dependency::Xcframework {
            path,
            expected_signature: Some(expected),
        } = dependency
        else {
            continue;
        };

        let actual = probe.signature_of(path).await?;
        if actual != *expected {
            issues.push(Issue::error(mismatch_reason(
                &path.display().to_string(),
                expected,
                &actual,
            )));
        }
    }

    Ok(issues)
}

fn mismatch_reason(path: &str, expected: &Signature, actual: &Signature) -> String {
    let expected_text = expected
        .signature_string()
        .unwrap_or_else(|| NO_SIGNATURE.to_string());
    let actual_text = actual
        .signature_string()
        .unwrap_or_else(|| NO_SIGNATURE.to_string());

    let hint = match expected {
        Signature::Unsigned => "unsigned XCFrameworks should not have any signature",
        Signature::SignedWithAppleCertificate { .. } => {
            "expected signatures have the format AppleDeveloperProgram:<team id>:<team name>"
        }
        Signature::SelfSigned { .. } => {
            "expected signatures have the format SelfSigned:<sha256 fingerprint>"
        }
    };

    format!(
        "The XCFramework at path {path} is expected to be signed with '{expected_text}' but its \
         signature is '{actual_text}'. Note that {hint}."
    )
}
