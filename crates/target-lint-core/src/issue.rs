//! Issue and severity types - the universal output unit of every rule.

use serde::{Deserialize, Serialize};

/// Severity level for a linting issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory finding; generation can proceed.
    Warning,
    /// Finding that callers typically block generation on.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A validation finding produced by a lint rule.
///
/// Issues are immutable once produced. The engine never merges or
/// deduplicates them; identical reasons from different rules coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Issue {
    /// Human-readable description of the finding.
    pub reason: String,
    /// Severity of this finding.
    pub severity: Severity,
}

impl Issue {
    /// Creates a new issue.
    #[must_use]
    pub fn new(reason: impl Into<String>, severity: Severity) -> Self {
        Self {
            reason: reason.into(),
            severity,
        }
    }

    /// Creates a warning-severity issue.
    #[must_use]
    pub fn warning(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Warning)
    }

    /// Creates an error-severity issue.
    #[must_use]
    pub fn error(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Error)
    }

    /// Returns true if this issue has error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_error_above_warning() {
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Issue::warning("w").severity, Severity::Warning);
        assert_eq!(Issue::error("e").severity, Severity::Error);
        assert!(Issue::error("e").is_error());
        assert!(!Issue::warning("w").is_error());
    }

    #[test]
    fn display_prefixes_severity() {
        let issue = Issue::error("bundle identifier is invalid");
        assert_eq!(issue.to_string(), "error: bundle identifier is invalid");
    }

    #[test]
    fn serializes_severity_lowercase() {
        let json = serde_json::to_string(&Issue::warning("w")).expect("serialize");
        assert!(json.contains(r#""severity":"warning""#));
    }
}
