//! Configure method nodes and ancestor resolution.

use crate::Result;
use forgemake_model::{ConfigureCollection, ConfigurePriority, Error, MethodId, ProjectModel};
use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One configure method taking part in a suspected ordering.
///
/// Equality and hashing only consider the method identity.
#[derive(Debug, Clone)]
pub struct ConfigureMethodInfo {
    owner: String,
    method: MethodId,
    priority: ConfigurePriority,
    ancestors: IndexMap<MethodId, Vec<String>>,
}

impl ConfigureMethodInfo {
    /// Resolve `signature` as seen from `project`.
    ///
    /// # Errors
    ///
    /// Fails when the type cannot be resolved or does not run a step named
    /// `signature`.
    pub fn new(
        model: &ProjectModel,
        project: &str,
        priority: ConfigurePriority,
        signature: &str,
    ) -> Result<Self> {
        let collection = ConfigureCollection::create(model, project)?;
        let method = collection
            .find(signature)
            .ok_or_else(|| Error::configure_not_found(project, signature))?
            .id()
            .clone();

        let ancestors = get_ancestors_with_method(model, project, signature)?;
        let owner = ancestors
            .get(&method)
            .and_then(|types| types.last())
            .cloned()
            .unwrap_or_else(|| method.declaring_type.clone());

        Ok(Self {
            owner,
            method,
            priority,
            ancestors,
        })
    }

    /// Least-derived type still running this exact method body.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Identity of the method body.
    #[must_use]
    pub fn method(&self) -> &MethodId {
        &self.method
    }

    /// Tier the method runs in.
    #[must_use]
    pub fn priority(&self) -> ConfigurePriority {
        self.priority
    }

    /// Every type along the chain that runs some definition of this step,
    /// most-derived first.
    pub fn ancestor_types(&self) -> impl Iterator<Item = &str> {
        self.ancestors.values().flatten().map(String::as_str)
    }
}

impl PartialEq for ConfigureMethodInfo {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
    }
}

impl Eq for ConfigureMethodInfo {}

impl Hash for ConfigureMethodInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.method.hash(state);
    }
}

impl fmt::Display for ConfigureMethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.method.name)
    }
}

/// Walk from `project` up its base chain while each type still runs a step
/// named `signature`, grouping the types by the method body they resolve to.
///
/// # Errors
///
/// Fails when a type along the chain cannot be resolved.
pub fn get_ancestors_with_method(
    model: &ProjectModel,
    project: &str,
    signature: &str,
) -> Result<IndexMap<MethodId, Vec<String>>> {
    let mut by_method: IndexMap<MethodId, Vec<String>> = IndexMap::new();
    let mut current = Some(project.to_string());

    while let Some(project) = current {
        let collection = ConfigureCollection::create(model, &project)?;
        let Some(configure) = collection.find(signature) else {
            break;
        };

        current = model.get(&project)?.base().map(str::to_string);
        by_method
            .entry(configure.id().clone())
            .or_default()
            .push(project);
    }

    Ok(by_method)
}
