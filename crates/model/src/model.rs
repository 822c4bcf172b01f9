//! Registry of every declared project and solution type.

use crate::{Error, ProjectDescriptor, Result};
use indexmap::IndexMap;
use tracing::debug;

/// The declarative project graph handed to a [`Builder`](crate::Builder).
///
/// Declaration order is preserved: generation and analysis visit types in
/// the order they were registered.
#[derive(Debug, Clone, Default)]
pub struct ProjectModel {
    descriptors: IndexMap<String, ProjectDescriptor>,
}

impl ProjectModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor.
    ///
    /// Bases may be registered after the types extending them; they are
    /// only resolved when the ancestry is requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProjectType`] if the name is taken.
    pub fn register(&mut self, descriptor: ProjectDescriptor) -> Result<()> {
        let name = descriptor.name().to_string();
        if self.descriptors.contains_key(&name) {
            return Err(Error::DuplicateProjectType { name });
        }
        debug!(project = %name, steps = descriptor.steps().len(), "Registered descriptor");
        self.descriptors.insert(name, descriptor);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn with(mut self, descriptor: ProjectDescriptor) -> Result<Self> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// Look up a descriptor by type name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProjectType`] if it was never registered.
    pub fn get(&self, name: &str) -> Result<&ProjectDescriptor> {
        self.descriptors
            .get(name)
            .ok_or_else(|| Error::unknown_project_type(name))
    }

    /// The descriptor and all its bases, most-derived first.
    ///
    /// # Errors
    ///
    /// Fails when a base is unknown or the base chain loops.
    pub fn ancestry(&self, name: &str) -> Result<Vec<&ProjectDescriptor>> {
        let mut chain: Vec<&ProjectDescriptor> = vec![self.get(name)?];

        while let Some(base) = chain.last().copied().and_then(ProjectDescriptor::base) {
            if chain.iter().any(|d| d.name() == base) {
                let mut names: Vec<String> = chain.iter().map(|d| d.name().to_string()).collect();
                names.push(base.to_string());
                return Err(Error::InheritanceCycle { chain: names });
            }

            let descriptor = self
                .descriptors
                .get(base)
                .ok_or_else(|| Error::UnknownBaseType {
                    project: chain.last().map(|d| d.name().to_string()).unwrap_or_default(),
                    base: base.to_string(),
                })?;
            chain.push(descriptor);
        }

        Ok(chain)
    }

    /// Descriptors the builder generates, in declaration order.
    pub fn generated_types(&self) -> impl Iterator<Item = &ProjectDescriptor> {
        self.descriptors.values().filter(|d| d.is_generated())
    }

    /// Every registered descriptor, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectDescriptor> {
        self.descriptors.values()
    }

    /// Number of registered descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
