//! Generated files and per-type generation results.

use crate::Error;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path of the file.
    pub path: String,
    /// Full file content.
    pub content: String,
}

/// In-memory stand-in for the output directory.
///
/// The store outlives individual generation passes, so a later pass can be
/// compared against what an earlier one wrote.
#[derive(Debug, Clone, Default)]
pub struct OutputStore {
    files: BTreeMap<String, String>,
}

impl OutputStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether writing `file` would change the store.
    #[must_use]
    pub fn is_different(&self, file: &GeneratedFile) -> bool {
        self.files.get(&file.path) != Some(&file.content)
    }

    /// Write `file` unless the stored content is identical.
    ///
    /// Returns whether anything was written.
    pub fn write_if_different(&mut self, file: &GeneratedFile) -> bool {
        if !self.is_different(file) {
            return false;
        }
        self.files.insert(file.path.clone(), file.content.clone());
        true
    }

    /// Stored content of a path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Number of stored files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Outcome of generating one project or solution type.
#[derive(Debug, Clone, Default)]
pub struct GenerationOutput {
    /// Paths whose content differed from the store.
    pub generated: Vec<String>,
    /// Paths whose content was identical.
    pub skipped: Vec<String>,
    /// First failure raised while configuring the type.
    pub error: Option<Error>,
}

impl GenerationOutput {
    /// Whether the pass produced anything different from the store.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.error.is_some() || !self.generated.is_empty()
    }

    /// Fold another output into this one, keeping the first error.
    pub fn merge(&mut self, other: Self) {
        self.generated.extend(other.generated);
        self.skipped.extend(other.skipped);
        if self.error.is_none() {
            self.error = other.error;
        }
    }
}

impl fmt::Display for GenerationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{error}"),
            None => write!(
                f,
                "Generated: {:2} Skipped: {:2}",
                self.generated.len(),
                self.skipped.len()
            ),
        }
    }
}

/// Generation results keyed by type name, in generation order.
pub type GenerationOutputs = IndexMap<String, GenerationOutput>;

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, content: &str) -> GeneratedFile {
        GeneratedFile {
            path: path.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_write_if_different() {
        let mut store = OutputStore::new();
        assert!(store.write_if_different(&file("a", "1")));
        assert!(!store.write_if_different(&file("a", "1")));
        assert!(store.is_different(&file("a", "2")));
        assert_eq!(store.get("a"), Some("1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_has_changed() {
        let mut output = GenerationOutput::default();
        assert!(!output.has_changed());

        output.skipped.push("a".to_string());
        assert!(!output.has_changed());

        output.merge(GenerationOutput {
            error: Some(Error::configure("boom")),
            ..GenerationOutput::default()
        });
        assert!(output.has_changed());
        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.to_string(), "Configure failed: boom");
    }

    #[test]
    fn test_display_counts() {
        let output = GenerationOutput {
            generated: vec!["a".to_string()],
            skipped: vec!["b".to_string(), "c".to_string()],
            error: None,
        };
        assert_eq!(output.to_string(), "Generated:  1 Skipped:  2");
    }
}
