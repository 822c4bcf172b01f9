//! Concrete build targets.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One resolved build target.
///
/// Fragments (platform, optimization, dev environment, ...) are kept as
/// opaque strings; combining them is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Target {
    name: String,
    fragments: BTreeMap<String, String>,
}

impl Target {
    /// Create a target with no fragments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragments: BTreeMap::new(),
        }
    }

    /// Attach a fragment value.
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>, value: impl Into<String>) -> Self {
        self.fragments.insert(fragment.into(), value.into());
        self
    }

    /// Name of the target, unique within one descriptor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of a fragment, if set.
    #[must_use]
    pub fn fragment(&self, fragment: &str) -> Option<&str> {
        self.fragments.get(fragment).map(String::as_str)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
