//! Analyzer configuration, loadable from TOML.
//!
//! ```toml
//! stop_on_first_error = true
//!
//! [tracing]
//! format = "compact"
//! level = "info"
//! ```

use crate::telemetry::TracingConfig;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Options of an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Stop after the first pass that produced a suspected pair.
    pub stop_on_first_error: bool,
    /// Logging setup for tools embedding the analyzer.
    pub tracing: TracingConfig,
}

impl AnalyzerConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(e, Some(path.to_path_buf()), "reading analyzer configuration")
        })?;
        Self::from_toml_str(&text)
    }

    /// Set [`stop_on_first_error`](Self::stop_on_first_error).
    #[must_use]
    pub fn with_stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }
}
