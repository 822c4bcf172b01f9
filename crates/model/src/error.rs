//! Error types for the forgemake project model

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for project model and generation operations
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum Error {
    /// A project or solution type was requested that was never registered
    #[error("Unknown project type '{name}'")]
    #[diagnostic(
        code(forgemake_model::model::unknown_type),
        help("Register the descriptor with ProjectModel::register before referencing it")
    )]
    UnknownProjectType {
        /// Name of the missing type
        name: String,
    },

    /// A descriptor with the same name was registered twice
    #[error("Project type '{name}' is already registered")]
    #[diagnostic(code(forgemake_model::model::duplicate_type))]
    DuplicateProjectType {
        /// Name of the duplicated type
        name: String,
    },

    /// A descriptor extends a base that does not exist
    #[error("Project type '{project}' extends unknown base '{base}'")]
    #[diagnostic(code(forgemake_model::model::unknown_base))]
    UnknownBaseType {
        /// The derived type
        project: String,
        /// The missing base type
        base: String,
    },

    /// The base chain of a descriptor loops back onto itself
    #[error("Inheritance cycle detected: {}", chain.join(" -> "))]
    #[diagnostic(code(forgemake_model::model::inheritance_cycle))]
    InheritanceCycle {
        /// The chain of types, most-derived first, ending with the repeated type
        chain: Vec<String>,
    },

    /// The same configure step name was registered twice on one descriptor
    #[error("Configure '{signature}' is registered twice on '{project}'")]
    #[diagnostic(
        code(forgemake_model::configure::duplicate),
        help("Overrides belong on a descriptor extending this one")
    )]
    DuplicateConfigure {
        /// The descriptor declaring the step
        project: String,
        /// The step name
        signature: String,
    },

    /// A configure signature could not be resolved on a type
    #[error("Configure '{signature}' not found on '{project}'")]
    #[diagnostic(code(forgemake_model::configure::not_found))]
    ConfigureNotFound {
        /// The type searched
        project: String,
        /// The signature that was requested
        signature: String,
    },

    /// A configure step body reported a failure
    #[error("Configure failed: {message}")]
    #[diagnostic(code(forgemake_model::configure::failed))]
    Configure {
        /// Description of the failure
        message: String,
    },

    /// A required configuration setting was read before anything set it
    #[error("Setting '{key}' is not set for target '{target}'")]
    #[diagnostic(code(forgemake_model::configuration::missing_setting))]
    MissingSetting {
        /// The setting key
        key: String,
        /// The target being configured
        target: String,
    },

    /// A configuration could not be rendered
    #[error("Serialization error: {message}")]
    #[diagnostic(code(forgemake_model::serialization))]
    Serialization {
        /// The error message describing the serialization issue
        message: String,
    },
}

impl Error {
    /// Create a configure failure with a message
    pub fn configure(message: impl Into<String>) -> Self {
        Self::Configure {
            message: message.into(),
        }
    }

    /// Create an unknown project type error
    pub fn unknown_project_type(name: impl Into<String>) -> Self {
        Self::UnknownProjectType { name: name.into() }
    }

    /// Create a configure lookup failure
    pub fn configure_not_found(project: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::ConfigureNotFound {
            project: project.into(),
            signature: signature.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Result type for project model operations
pub type Result<T> = std::result::Result<T, Error>;
