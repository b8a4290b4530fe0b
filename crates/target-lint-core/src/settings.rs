//! Build settings attached to a target.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a single build setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// A literal string value.
    String(String),
    /// A list value, joined by Xcode at build time.
    Array(Vec<String>),
}

impl SettingValue {
    /// Returns the literal string value, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Array(_) => None,
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Build settings: a base map plus per-configuration overrides.
///
/// `BTreeMap` keeps iteration order deterministic, which the engine relies on
/// for reproducible issue sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Settings applied to every configuration.
    pub base: BTreeMap<String, SettingValue>,
    /// Per-configuration settings; a `None` value means the configuration
    /// exists but declares no overrides.
    pub configurations: BTreeMap<String, Option<BTreeMap<String, SettingValue>>>,
}

impl Settings {
    /// Adds a base setting.
    #[must_use]
    pub fn with_base(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.base.insert(key.into(), value.into());
        self
    }

    /// Adds a configuration with a single override.
    #[must_use]
    pub fn with_configuration(
        mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<SettingValue>,
    ) -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert(key.into(), value.into());
        self.configurations.insert(name.into(), Some(overrides));
        self
    }
}
