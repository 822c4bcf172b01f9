//! Configure priority tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution tier of a configure step.
///
/// Tiers are sorted ascending: `-1` runs before `0`, which runs before `1`.
/// Steps without an explicit priority use [`ConfigurePriority::DEFAULT`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ConfigurePriority(pub i32);

impl ConfigurePriority {
    /// Priority used when a step states none.
    pub const DEFAULT: Self = Self(0);

    /// Numeric value of the tier.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for ConfigurePriority {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ConfigurePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities_sort_ascending() {
        let mut tiers = vec![
            ConfigurePriority(2),
            ConfigurePriority::DEFAULT,
            ConfigurePriority(-1),
        ];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![
                ConfigurePriority(-1),
                ConfigurePriority(0),
                ConfigurePriority(2)
            ]
        );
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(ConfigurePriority::default(), ConfigurePriority::DEFAULT);
        assert_eq!(ConfigurePriority::DEFAULT.to_string(), "0");
    }
}
