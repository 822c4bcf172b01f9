//! Deduplicated dependency graph between configure methods.
//!
//! Edges point from a dependency to its dependent: `a -> b` means `a` must
//! run before `b`. Each direction is queried through petgraph's incoming and
//! outgoing neighbours, so recording one edge maintains both sides.

use crate::{ConfigureMethodInfo, ConfigureSignature, Error, Result};
use forgemake_model::{ConfigurePriority, MethodId, ProjectModel};
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use tracing::debug;

/// Configure methods and the ordering constraints found between them.
#[derive(Debug, Clone, Default)]
pub struct ConfigureReport {
    /// The directed graph of methods.
    graph: DiGraph<ConfigureMethodInfo, ()>,
    /// Map from (method identity, owner type) to node index.
    cache: HashMap<(MethodId, String), NodeIndex>,
}

impl ConfigureReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report from raw findings.
    ///
    /// For every finding the dependency and the dependent are cached in and
    /// linked.
    ///
    /// # Errors
    ///
    /// Fails when a finding names a step the model cannot resolve.
    pub fn from_signatures<'a>(
        model: &ProjectModel,
        signatures: impl IntoIterator<Item = &'a ConfigureSignature>,
    ) -> Result<Self> {
        let mut report = Self::new();
        for configure in signatures {
            let dependency = report.cache_in(
                model,
                &configure.declaring_type,
                configure.priority,
                &configure.dependency_signature,
            )?;
            let dependent = report.cache_in(
                model,
                &configure.declaring_type,
                configure.priority,
                &configure.signature,
            )?;
            report.add_dependent(dependency, dependent)?;
        }
        Ok(report)
    }

    /// Return the node for a (type, priority, signature) key, creating it on
    /// first use.
    ///
    /// Two keys resolving to the same method body and owner share one node.
    ///
    /// # Errors
    ///
    /// Fails when the signature cannot be resolved on `project`.
    pub fn cache_in(
        &mut self,
        model: &ProjectModel,
        project: &str,
        priority: ConfigurePriority,
        signature: &str,
    ) -> Result<NodeIndex> {
        let configure = ConfigureMethodInfo::new(model, project, priority, signature)?;
        let key = (configure.method().clone(), configure.owner().to_string());

        if let Some(&node) = self.cache.get(&key) {
            return Ok(node);
        }

        debug!(method = %configure, %priority, "Cached configure method");
        let node = self.graph.add_node(configure);
        self.cache.insert(key, node);
        Ok(node)
    }

    /// Record that `dependent` must run after `dependency`.
    ///
    /// Recording the same edge twice is a no-op. Only the priority tier is
    /// checked here: nodes are keyed by method body and owner, so types
    /// inheriting the same steps share nodes, and keeping findings of one
    /// analysed type together is up to the caller, as
    /// [`from_signatures`](Self::from_signatures) does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CrossTierDependency`] when the two methods belong to
    /// different priority tiers; tiers already order them.
    pub fn add_dependent(&mut self, dependency: NodeIndex, dependent: NodeIndex) -> Result<()> {
        let (from, to) = (&self.graph[dependency], &self.graph[dependent]);
        if from.priority() != to.priority() {
            return Err(Error::CrossTierDependency {
                dependency: from.to_string(),
                dependent: to.to_string(),
            });
        }

        self.graph.update_edge(dependency, dependent, ());
        Ok(())
    }

    /// Methods that must run after `node`.
    pub fn dependents(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    /// Methods that must run before `node`.
    pub fn dependencies(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(node, Direction::Incoming)
    }

    /// The method stored at `node`.
    #[must_use]
    pub fn method(&self, node: NodeIndex) -> Option<&ConfigureMethodInfo> {
        self.graph.node_weight(node)
    }

    /// Every node, in insertion order.
    pub fn methods(&self) -> impl Iterator<Item = (NodeIndex, &ConfigureMethodInfo)> {
        self.graph
            .node_indices()
            .map(move |node| (node, &self.graph[node]))
    }

    /// Methods nothing else has to run before: the first ones to pin down.
    pub fn roots(&self) -> impl Iterator<Item = (NodeIndex, &ConfigureMethodInfo)> {
        self.methods()
            .filter(|(node, _)| self.dependencies(*node).next().is_none())
    }

    /// Look up the node of a method by its identity and owner type.
    #[must_use]
    pub fn find(&self, method: &MethodId, owner: &str) -> Option<NodeIndex> {
        self.cache
            .get(&(method.clone(), owner.to_string()))
            .copied()
    }

    /// Check if the dependencies loop.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Number of methods in the report.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of recorded dependencies.
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the report holds no method.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgemake_model::{ConfigureStep, ProjectDescriptor};

    fn model() -> ProjectModel {
        let mut project = ProjectDescriptor::project("P");
        for name in ["A", "B", "C"] {
            project
                .add_step(ConfigureStep::new(name, |_, _| Ok(())))
                .unwrap();
        }
        project
            .add_step(ConfigureStep::new("Late", |_, _| Ok(())).priority(5))
            .unwrap();
        ProjectModel::new().with(project).unwrap()
    }

    #[test]
    fn test_cache_in_returns_same_node() {
        let model = model();
        let mut report = ConfigureReport::new();

        let first = report
            .cache_in(&model, "P", ConfigurePriority::DEFAULT, "A")
            .unwrap();
        let second = report
            .cache_in(&model, "P", ConfigurePriority::DEFAULT, "A")
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(report.method_count(), 1);
    }

    #[test]
    fn test_add_dependent_is_bidirectional_and_idempotent() {
        let model = model();
        let mut report = ConfigureReport::new();
        let a = report
            .cache_in(&model, "P", ConfigurePriority::DEFAULT, "A")
            .unwrap();
        let b = report
            .cache_in(&model, "P", ConfigurePriority::DEFAULT, "B")
            .unwrap();

        report.add_dependent(a, b).unwrap();
        report.add_dependent(a, b).unwrap();

        assert_eq!(report.dependents(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(report.dependencies(b).collect::<Vec<_>>(), vec![a]);
        assert_eq!(report.dependencies(a).count(), 0);
        assert_eq!(report.dependency_count(), 1);
    }

    #[test]
    fn test_cross_tier_edge_rejected() {
        let model = model();
        let mut report = ConfigureReport::new();
        let a = report
            .cache_in(&model, "P", ConfigurePriority::DEFAULT, "A")
            .unwrap();
        let late = report
            .cache_in(&model, "P", ConfigurePriority(5), "Late")
            .unwrap();

        assert!(matches!(
            report.add_dependent(a, late),
            Err(Error::CrossTierDependency { .. })
        ));
    }

    #[test]
    fn test_from_signatures_and_roots() {
        let model = model();
        let findings = vec![
            ConfigureSignature::new("P", ConfigurePriority::DEFAULT, "B", "A"),
            ConfigureSignature::new("P", ConfigurePriority::DEFAULT, "C", "A"),
            ConfigureSignature::new("P", ConfigurePriority::DEFAULT, "C", "A"),
        ];

        let report = ConfigureReport::from_signatures(&model, &findings).unwrap();
        assert_eq!(report.method_count(), 3);
        assert_eq!(report.dependency_count(), 2);

        let roots: Vec<String> = report.roots().map(|(_, m)| m.to_string()).collect();
        assert_eq!(roots, vec!["P.A"]);
        assert!(!report.has_cycles());
    }

    #[test]
    fn test_inherited_findings_share_nodes() {
        let base = ProjectDescriptor::project("Base")
            .abstract_base()
            .with_step(ConfigureStep::new("A", |_, _| Ok(())))
            .and_then(|p| p.with_step(ConfigureStep::new("B", |_, _| Ok(()))))
            .unwrap();
        let model = ProjectModel::new()
            .with(base)
            .and_then(|m| m.with(ProjectDescriptor::project("Left").extends("Base")))
            .and_then(|m| m.with(ProjectDescriptor::project("Right").extends("Base")))
            .and_then(|m| m.with(model().get("P").cloned().unwrap()))
            .unwrap();

        let findings = vec![
            ConfigureSignature::new("Left", ConfigurePriority::DEFAULT, "B", "A"),
            ConfigureSignature::new("Right", ConfigurePriority::DEFAULT, "B", "A"),
            ConfigureSignature::new("P", ConfigurePriority::DEFAULT, "B", "A"),
        ];
        let report = ConfigureReport::from_signatures(&model, &findings).unwrap();

        // Left and Right run Base's bodies; P declares its own
        assert_eq!(report.method_count(), 4);
        assert_eq!(report.dependency_count(), 2);
        let mut roots: Vec<String> = report.roots().map(|(_, m)| m.to_string()).collect();
        roots.sort();
        assert_eq!(roots, vec!["Base.A", "P.A"]);
    }
}
