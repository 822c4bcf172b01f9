//! Raw dependency findings.

use forgemake_model::ConfigurePriority;
use std::fmt;

/// One suspected ordering: `signature` must run after `dependency_signature`.
///
/// Both steps belong to the same tier of the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigureSignature {
    /// The analysed project or solution type.
    pub declaring_type: String,
    /// Tier both steps belong to.
    pub priority: ConfigurePriority,
    /// The dependent step.
    pub signature: String,
    /// The step it depends on.
    pub dependency_signature: String,
}

impl ConfigureSignature {
    /// Create a finding.
    pub fn new(
        declaring_type: impl Into<String>,
        priority: ConfigurePriority,
        signature: impl Into<String>,
        dependency_signature: impl Into<String>,
    ) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            priority,
            signature: signature.into(),
            dependency_signature: dependency_signature.into(),
        }
    }
}

impl fmt::Display for ConfigureSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} after {}",
            self.declaring_type, self.priority, self.signature, self.dependency_signature
        )
    }
}
