//! Error types for the forgemake-analyzer crate

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analysis runs
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A generation pass failed on a malformed project model
    #[error("Generation pass failed: {0}")]
    #[diagnostic(code(forgemake_analyzer::generation))]
    Generation(#[from] forgemake_model::Error),

    /// The findings could not be turned into a report
    #[error("Report construction failed: {0}")]
    #[diagnostic(code(forgemake_analyzer::report))]
    Report(#[from] forgemake_configure_graph::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(forgemake_analyzer::config::invalid),
        help("See AnalyzerConfig for the accepted keys")
    )]
    Configuration {
        /// The error message describing the configuration issue
        message: String,
    },

    /// I/O error with path context
    #[error("I/O error during {operation}: {source}")]
    #[diagnostic(code(forgemake_analyzer::io::error))]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// The path where the I/O error occurred, if applicable
        path: Option<Box<std::path::Path>>,
        /// Description of the operation that failed
        operation: String,
    },
}

impl Error {
    /// Create a configuration error with a message
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(source: std::io::Error, path: Option<PathBuf>, operation: impl Into<String>) -> Self {
        Self::Io {
            source,
            path: path.map(|p| p.into_boxed_path()),
            operation: operation.into(),
        }
    }
}

/// Result type for analysis runs
pub type Result<T> = std::result::Result<T, Error>;
