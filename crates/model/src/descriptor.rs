//! Explicit registration of projects, solutions and their configure steps.
//!
//! A [`ProjectDescriptor`] carries an ordered list of named [`ConfigureStep`]s.
//! Descriptors may extend a base descriptor: they inherit the base's steps and
//! can override one by registering a step with the same name, or append new
//! ones.

use crate::{ConfigurePriority, Configuration, Error, Result, Target};
use std::fmt;
use std::sync::Arc;

/// Body of a configure step.
pub type ConfigureFn = dyn Fn(&mut Configuration, &Target) -> Result<()> + Send + Sync;

/// Predicate restricting a configure step to some targets.
pub type TargetPredicate = dyn Fn(&Target) -> bool + Send + Sync;

/// A named configuration callback.
#[derive(Clone)]
pub struct ConfigureStep {
    name: String,
    priority: Option<ConfigurePriority>,
    predicate: Option<Arc<TargetPredicate>>,
    body: Arc<ConfigureFn>,
}

impl ConfigureStep {
    /// Create a step with the default priority that applies to every target.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut Configuration, &Target) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            priority: None,
            predicate: None,
            body: Arc::new(body),
        }
    }

    /// Place the step in an explicit priority tier.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<ConfigurePriority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Only run the step for targets matching the predicate.
    #[must_use]
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&Target) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Step name, which doubles as its signature.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit priority, if one was stated.
    #[must_use]
    pub fn declared_priority(&self) -> Option<ConfigurePriority> {
        self.priority
    }

    pub(crate) fn predicate(&self) -> Option<&Arc<TargetPredicate>> {
        self.predicate.as_ref()
    }

    pub(crate) fn body(&self) -> &Arc<ConfigureFn> {
        &self.body
    }
}

impl fmt::Debug for ConfigureStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigureStep")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("filtered", &self.predicate.is_some())
            .finish_non_exhaustive()
    }
}

/// What a descriptor generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// A project file
    Project,
    /// A solution grouping projects
    Solution,
}

impl ProjectKind {
    /// File extension used for rendered outputs.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Project => "proj.json",
            Self::Solution => "sln.json",
        }
    }
}

/// Declarative description of a project or solution type.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    name: String,
    kind: ProjectKind,
    base: Option<String>,
    targets: Vec<Target>,
    steps: Vec<ConfigureStep>,
    generate: bool,
}

impl ProjectDescriptor {
    /// Describe a generated project.
    pub fn project(name: impl Into<String>) -> Self {
        Self::new(name, ProjectKind::Project)
    }

    /// Describe a generated solution.
    pub fn solution(name: impl Into<String>) -> Self {
        Self::new(name, ProjectKind::Solution)
    }

    fn new(name: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            base: None,
            targets: Vec::new(),
            steps: Vec::new(),
            generate: true,
        }
    }

    /// Inherit the steps of another registered descriptor.
    #[must_use]
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Mark the descriptor as a base only: it is never generated itself.
    #[must_use]
    pub fn abstract_base(mut self) -> Self {
        self.generate = false;
        self
    }

    /// Add a target to generate.
    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Register a configure step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateConfigure`] when this descriptor already
    /// declares a step with the same name.
    pub fn add_step(&mut self, step: ConfigureStep) -> Result<()> {
        if self.steps.iter().any(|s| s.name == step.name) {
            return Err(Error::DuplicateConfigure {
                project: self.name.clone(),
                signature: step.name,
            });
        }
        self.steps.push(step);
        Ok(())
    }

    /// Builder-style [`add_step`](Self::add_step).
    ///
    /// # Errors
    ///
    /// Same as [`add_step`](Self::add_step).
    pub fn with_step(mut self, step: ConfigureStep) -> Result<Self> {
        self.add_step(step)?;
        Ok(self)
    }

    /// Shorthand for a default-priority step applying to every target.
    ///
    /// # Errors
    ///
    /// Same as [`add_step`](Self::add_step).
    pub fn configure<F>(self, name: &str, body: F) -> Result<Self>
    where
        F: Fn(&mut Configuration, &Target) -> Result<()> + Send + Sync + 'static,
    {
        self.with_step(ConfigureStep::new(name, body))
    }

    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of output.
    #[must_use]
    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Name of the base descriptor, if any.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Targets declared on this descriptor.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Steps declared directly on this descriptor, in registration order.
    #[must_use]
    pub fn steps(&self) -> &[ConfigureStep] {
        &self.steps
    }

    /// Whether the builder generates this descriptor.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.generate
    }
}
