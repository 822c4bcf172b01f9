//! Build contexts steer a generation pass.
//!
//! A context decides which types are generated, may reorder the steps of a
//! priority tier, and decides what happens to rendered files. Analysis passes
//! are contexts too; see the `forgemake-analyzer` crate.

use crate::{ConfigurePriority, GeneratedFile, OutputStore, ResolvedConfigure};

/// Explicit context handed to [`Builder::generate`](crate::Builder::generate).
pub trait BuildContext {
    /// Whether `project` takes part in this pass.
    fn have_to_generate(&self, _project: &str) -> bool {
        true
    }

    /// Order in which the steps of one priority tier of `project` run.
    ///
    /// Called once per type and tier before any target is configured.
    fn order_configure(
        &mut self,
        _project: &str,
        _priority: ConfigurePriority,
        configures: Vec<ResolvedConfigure>,
    ) -> Vec<ResolvedConfigure> {
        configures
    }

    /// Handle a rendered file. Returns whether it counts as generated,
    /// meaning it differs from what the store holds.
    fn write_generated_file(
        &mut self,
        _project: &str,
        file: &GeneratedFile,
        store: &mut OutputStore,
    ) -> bool {
        store.write_if_different(file)
    }
}

/// Generates every type in declared order.
#[derive(Debug, Clone, Copy)]
pub struct GenerateAll {
    write_generated_files: bool,
}

impl GenerateAll {
    /// When `write_generated_files` is false, files are only compared.
    #[must_use]
    pub fn new(write_generated_files: bool) -> Self {
        Self {
            write_generated_files,
        }
    }
}

impl Default for GenerateAll {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BuildContext for GenerateAll {
    fn write_generated_file(
        &mut self,
        _project: &str,
        file: &GeneratedFile,
        store: &mut OutputStore,
    ) -> bool {
        if self.write_generated_files {
            store.write_if_different(file)
        } else {
            store.is_different(file)
        }
    }
}
