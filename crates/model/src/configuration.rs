//! Per-target configuration mutated by configure steps.

use crate::{Error, Result, Target};
use serde::Serialize;
use std::collections::BTreeMap;

/// Settings produced for one target of one project or solution.
///
/// Keys are kept sorted so the rendered output only depends on the values
/// the configure steps produced, never on the order keys were first written.
/// List values keep their push order.
#[derive(Debug, Clone, Serialize)]
pub struct Configuration {
    target: Target,
    settings: BTreeMap<String, String>,
    lists: BTreeMap<String, Vec<String>>,
}

impl Configuration {
    /// Create an empty configuration for a target.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            target,
            settings: BTreeMap::new(),
            lists: BTreeMap::new(),
        }
    }

    /// The target being configured.
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Set a scalar setting, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Read a scalar setting.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }

    /// Read a scalar setting that an earlier step must have set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] when the key is unset.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::MissingSetting {
            key: key.to_string(),
            target: self.target.name().to_string(),
        })
    }

    /// Append a value to a list setting.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.lists.entry(key.into()).or_default().push(value.into());
    }

    /// Values of a list setting, empty when never pushed to.
    #[must_use]
    pub fn list(&self, key: &str) -> &[String] {
        self.lists.get(key).map_or(&[], Vec::as_slice)
    }

    /// Render the configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if rendering fails.
    pub fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_missing_setting() {
        let conf = Configuration::new(Target::new("debug"));
        let err = conf.require("project_path").unwrap_err();
        assert!(matches!(err, Error::MissingSetting { ref key, .. } if key == "project_path"));
    }

    #[test]
    fn test_render_ignores_key_insertion_order() {
        let mut first = Configuration::new(Target::new("debug"));
        first.set("a", "1");
        first.set("b", "2");

        let mut second = Configuration::new(Target::new("debug"));
        second.set("b", "2");
        second.set("a", "1");

        assert_eq!(first.render().unwrap(), second.render().unwrap());
    }

    #[test]
    fn test_render_keeps_list_order() {
        let mut first = Configuration::new(Target::new("debug"));
        first.push("defines", "A");
        first.push("defines", "B");

        let mut second = Configuration::new(Target::new("debug"));
        second.push("defines", "B");
        second.push("defines", "A");

        assert_ne!(first.render().unwrap(), second.render().unwrap());
        assert_eq!(first.list("defines"), ["A", "B"]);
        assert!(first.list("includes").is_empty());
    }
}
