//! Error types for configure graph operations.

use std::fmt;

/// Result type for configure graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or weighting a configure report.
#[derive(Debug, Clone)]
pub enum Error {
    /// A dependency cycle was detected between configure methods.
    CycleDetected {
        /// Methods forming the cycle, in dependent order, first one repeated last.
        cycle: Vec<String>,
    },

    /// An edge was requested between methods of different priority tiers.
    CrossTierDependency {
        /// The method that must run first.
        dependency: String,
        /// The method that must run after it.
        dependent: String,
    },

    /// A configure method could not be resolved on the project model.
    Resolution(forgemake_model::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CycleDetected { cycle } => {
                write!(f, "Cycle detected between configure methods: {}", cycle.join(" -> "))
            }
            Self::CrossTierDependency {
                dependency,
                dependent,
            } => {
                write!(
                    f,
                    "Configure '{dependent}' cannot depend on '{dependency}' from another priority tier"
                )
            }
            Self::Resolution(source) => {
                write!(f, "Failed to resolve configure method: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolution(source) => Some(source),
            _ => None,
        }
    }
}

impl From<forgemake_model::Error> for Error {
    fn from(source: forgemake_model::Error) -> Self {
        Self::Resolution(source)
    }
}
