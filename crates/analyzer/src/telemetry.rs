//! Tracing setup for tools embedding the analyzer.

use serde::Deserialize;
use std::io;
use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Tracing output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingFormat {
    /// Pretty-printed human-readable format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
    /// Structured JSON format
    Json,
}

impl std::str::FromStr for TracingFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown tracing format: {s}")),
        }
    }
}

/// Tracing configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Output format
    pub format: TracingFormat,
    /// Minimum level: `trace`, `debug`, `info`, `warn` or `error`
    pub level: String,
    /// Explicit `EnvFilter` directives, overriding `level`
    pub filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            format: TracingFormat::Pretty,
            level: "warn".to_string(),
            filter: None,
        }
    }
}

impl TracingConfig {
    /// Parsed minimum level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] for an unknown level name.
    pub fn level(&self) -> crate::Result<Level> {
        self.level
            .parse()
            .map_err(|_| crate::Error::configuration(format!("Unknown log level: {}", self.level)))
    }

    fn env_filter(&self) -> crate::Result<EnvFilter> {
        let filter = if let Some(filter) = &self.filter {
            EnvFilter::try_new(filter)
        } else {
            let level = self.level()?.as_str().to_lowercase();
            EnvFilter::try_from_default_env().or_else(|_| {
                EnvFilter::try_new(format!(
                    "forgemake_analyzer={level},forgemake_model={level},forgemake_configure_graph={level}"
                ))
            })
        };
        filter.map_err(|e| crate::Error::configuration(format!("Failed to create tracing filter: {e}")))
    }
}

/// Install a global tracing subscriber writing to stderr.
///
/// # Errors
///
/// Fails when the configuration is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &TracingConfig) -> crate::Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    let installed = match config.format {
        TracingFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(io::stderr)
                    .with_target(true),
            )
            .try_init(),
        TracingFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_target(false),
            )
            .try_init(),
        TracingFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init(),
    };
    installed.map_err(|e| crate::Error::configuration(format!("Failed to install tracing: {e}")))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        format = ?config.format,
        "Tracing initialized for forgemake analyzer"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("pretty".parse::<TracingFormat>().unwrap(), TracingFormat::Pretty);
        assert_eq!("JSON".parse::<TracingFormat>().unwrap(), TracingFormat::Json);
        assert!("invalid".parse::<TracingFormat>().is_err());
    }

    #[test]
    fn test_level_parsing() {
        let mut config = TracingConfig::default();
        assert_eq!(config.level().unwrap(), Level::WARN);

        config.level = "loud".to_string();
        assert!(config.level().is_err());
        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = TracingConfig {
            filter: Some("forgemake=[".to_string()),
            ..TracingConfig::default()
        };
        assert!(init_tracing(&config).is_err());
    }
}
