//! Ordered view of the configure steps a type runs.
//!
//! Steps are resolved across the base chain: the most-derived definition of a
//! signature wins, but it keeps the position of the least-derived declaration.
//! Types are visited root-most first and, within one type, steps keep their
//! registration order. The result is bucketed by [`ConfigurePriority`].

use crate::descriptor::{ConfigureFn, TargetPredicate};
use crate::{ConfigurePriority, ProjectModel, Result, Target};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Identity of one registered step body.
///
/// Two types resolving a signature to the same `MethodId` run the same body.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodId {
    /// The descriptor that registered the body.
    pub declaring_type: String,
    /// The step name.
    pub name: String,
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)
    }
}

/// A configure step as seen from one concrete type.
#[derive(Clone)]
pub struct ResolvedConfigure {
    id: MethodId,
    priority: ConfigurePriority,
    predicate: Option<Arc<TargetPredicate>>,
    body: Arc<ConfigureFn>,
}

impl ResolvedConfigure {
    /// Identity of the body that runs.
    #[must_use]
    pub fn id(&self) -> &MethodId {
        &self.id
    }

    /// The signature shared by every override of this step.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.id.name
    }

    /// Effective priority tier.
    #[must_use]
    pub fn priority(&self) -> ConfigurePriority {
        self.priority
    }

    /// Whether the step runs for a target.
    #[must_use]
    pub fn applies_to(&self, target: &Target) -> bool {
        self.predicate.as_ref().is_none_or(|p| p(target))
    }

    pub(crate) fn body(&self) -> &ConfigureFn {
        self.body.as_ref()
    }
}

impl fmt::Debug for ResolvedConfigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfigure")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// The configure steps of one type, grouped by ascending priority.
#[derive(Debug, Clone)]
pub struct ConfigureCollection {
    project: String,
    priorities: BTreeMap<ConfigurePriority, Vec<ResolvedConfigure>>,
}

impl ConfigureCollection {
    /// Resolve the configure steps of `project`.
    ///
    /// # Errors
    ///
    /// Fails when the type or one of its bases cannot be resolved.
    pub fn create(model: &ProjectModel, project: &str) -> Result<Self> {
        let chain = model.ancestry(project)?;

        // signature -> (declaring type, registration index, step), most-derived first
        let mut by_signature: IndexMap<&str, Vec<(&str, usize, &crate::ConfigureStep)>> =
            IndexMap::new();
        for descriptor in &chain {
            for (index, step) in descriptor.steps().iter().enumerate() {
                by_signature.entry(step.name()).or_default().push((
                    descriptor.name(),
                    index,
                    step,
                ));
            }
        }

        // root declaring type -> [(registration index, resolved)]
        let mut by_root: IndexMap<&str, Vec<(usize, ResolvedConfigure)>> = IndexMap::new();
        for definitions in by_signature.values() {
            let (Some(&(declaring, _, step)), Some(&(root, root_index, _))) =
                (definitions.first(), definitions.last())
            else {
                continue;
            };

            let priority = definitions
                .iter()
                .find_map(|(_, _, s)| s.declared_priority())
                .unwrap_or_default();

            by_root.entry(root).or_default().push((
                root_index,
                ResolvedConfigure {
                    id: MethodId {
                        declaring_type: declaring.to_string(),
                        name: step.name().to_string(),
                    },
                    priority,
                    predicate: step.predicate().cloned(),
                    body: Arc::clone(step.body()),
                },
            ));
        }

        let mut priorities: BTreeMap<ConfigurePriority, Vec<ResolvedConfigure>> = BTreeMap::new();
        for descriptor in chain.iter().rev() {
            let Some(mut configures) = by_root.shift_remove(descriptor.name()) else {
                continue;
            };
            configures.sort_by_key(|(index, _)| *index);
            for (_, configure) in configures {
                priorities
                    .entry(configure.priority)
                    .or_default()
                    .push(configure);
            }
        }

        Ok(Self {
            project: project.to_string(),
            priorities,
        })
    }

    /// Type the collection was resolved for.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Priority tiers in execution order.
    pub fn priorities(&self) -> impl Iterator<Item = (ConfigurePriority, &[ResolvedConfigure])> {
        self.priorities
            .iter()
            .map(|(priority, configures)| (*priority, configures.as_slice()))
    }

    /// All steps in default execution order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedConfigure> {
        self.priorities.values().flatten()
    }

    /// The effective step for a signature.
    #[must_use]
    pub fn find(&self, signature: &str) -> Option<&ResolvedConfigure> {
        self.iter().find(|c| c.signature() == signature)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.priorities.values().map(Vec::len).sum()
    }

    /// Whether the type has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
