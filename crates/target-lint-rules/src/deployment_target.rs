//! Rule checking deployment-target versions against the destination set.

use regex::Regex;
use std::sync::LazyLock;
use target_lint_core::{Destination, Issue, Platform, Target};

static VERSION_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+(\.\d+)?$").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Checks each configured deployment target for version format and for
/// consistency with the target's destinations.
///
/// A malformed version short-circuits the consistency check for that
/// platform. A visionOS deployment target is accepted when the destination
/// set includes the iPad-design-on-Vision destination, even without a native
/// vision destination.
#[must_use]
pub fn lint_deployment_targets(target: &Target) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (platform, version) in target.deployment_targets.configured() {
        if !VERSION_FORMAT.is_match(version) {
            issues.push(Issue::error(format!(
                "The {platform} deployment target version '{version}' is incorrectly formatted. \
                 Expected a version such as 16.0 or 16.0.1."
            )));
            continue;
        }

        let supported = target
            .destinations
            .iter()
            .any(|destination| destination.platform() == platform);
        let vision_via_ipad_design = platform == Platform::VisionOs
            && target
                .destinations
                .contains(&Destination::AppleVisionWithIpadDesign);

        if !supported && !vision_via_ipad_design {
            let mut destinations: Vec<&str> =
                target.destinations.iter().map(|d| d.raw_id()).collect();
            destinations.sort_unstable();
            issues.push(Issue::error(format!(
                "Found an inconsistency between the {platform} deployment target and the \
                 destinations [{}].",
                destinations.join(", ")
            )));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use target_lint_core::{DeploymentTargets, ProductKind};

    fn target(destinations: Vec<Destination>, deployment_targets: DeploymentTargets) -> Target {
        let mut target = Target::new("App", ProductKind::App, "com.acme.app")
            .with_destinations(destinations);
        target.deployment_targets = deployment_targets;
        target
    }

    #[test]
    fn well_formed_consistent_target_is_fine() {
        let t = target(vec![Destination::Iphone], DeploymentTargets::ios("16.0"));
        assert!(lint_deployment_targets(&t).is_empty());

        let t = target(vec![Destination::Iphone], DeploymentTargets::ios("16.0.1"));
        assert!(lint_deployment_targets(&t).is_empty());
    }

    #[test]
    fn malformed_version_errors() {
        for version in ["16", "16.0.0.1", "16.x", "latest", ""] {
            let t = target(vec![Destination::Iphone], DeploymentTargets::ios(version));
            let issues = lint_deployment_targets(&t);
            assert_eq!(issues.len(), 1, "version {version:?}");
            assert!(issues[0].reason.contains("incorrectly formatted"));
        }
    }

    #[test]
    fn malformed_version_short_circuits_consistency_check() {
        // macOS version is malformed and the destinations do not cover
        // macOS; only the format error is reported for that platform.
        let t = target(
            vec![Destination::Iphone],
            DeploymentTargets {
                macos: Some("14".into()),
                ..DeploymentTargets::default()
            },
        );
        let issues = lint_deployment_targets(&t);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].reason.contains("incorrectly formatted"));
    }

    #[test]
    fn platform_missing_from_destinations_errors() {
        let t = target(
            vec![Destination::Iphone, Destination::Ipad],
            DeploymentTargets {
                tvos: Some("17.0".into()),
                ..DeploymentTargets::default()
            },
        );
        let issues = lint_deployment_targets(&t);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].reason.contains("inconsistency"));
        assert!(issues[0].reason.contains("[ipad, iphone]"));
    }

    #[test]
    fn vision_deployment_accepted_via_ipad_design_destination() {
        let t = target(
            vec![Destination::Iphone, Destination::AppleVisionWithIpadDesign],
            DeploymentTargets {
                visionos: Some("1.0".into()),
                ..DeploymentTargets::default()
            },
        );
        assert!(lint_deployment_targets(&t).is_empty());
    }

    #[test]
    fn vision_deployment_without_any_vision_destination_errors() {
        let t = target(
            vec![Destination::Iphone],
            DeploymentTargets {
                visionos: Some("1.0".into()),
                ..DeploymentTargets::default()
            },
        );
        assert_eq!(lint_deployment_targets(&t).len(), 1);
    }

    #[test]
    fn each_platform_is_checked() {
        let t = target(
            vec![Destination::AppleTv],
            DeploymentTargets {
                ios: Some("bad".into()),
                tvos: Some("17.0".into()),
                macos: Some("14.0".into()),
                ..DeploymentTargets::default()
            },
        );
        let issues = lint_deployment_targets(&t);
        // iOS: format error; tvOS: fine; macOS: inconsistency.
        assert_eq!(issues.len(), 2);
    }
}
