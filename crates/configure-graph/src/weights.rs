//! Ranking of configure methods by how much depends on them.
//!
//! The base weight of a method is its number of direct dependents minus its
//! priority. Its weight is its base weight plus the base weight of every
//! method transitively depending on it, each counted once however many paths
//! lead to it. Methods with many transitive dependents and an early tier rank
//! first.

use crate::{ConfigureReport, Error, Result};
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet};

/// Weight of every method of a report.
pub type Weights = HashMap<NodeIndex, i64>;

impl ConfigureReport {
    /// Compute the weight of every method.
    ///
    /// Transitive dependents are memoized per method, so a dependent shared
    /// by several methods is only walked once. Sums saturate at the `i64`
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] when a method transitively depends on
    /// itself.
    pub fn calculate_weights(&self) -> Result<Weights> {
        let mut below: HashMap<NodeIndex, HashSet<NodeIndex>> = HashMap::new();
        let mut weights = Weights::new();

        for node in self.dependents_first()? {
            let mut reached = HashSet::new();
            for dependent in self.dependents(node) {
                reached.insert(dependent);
                if let Some(transitive) = below.get(&dependent) {
                    reached.extend(transitive.iter().copied());
                }
            }

            let weight = reached
                .iter()
                .fold(self.base_weight(node), |sum, n| {
                    sum.saturating_add(self.base_weight(*n))
                });
            weights.insert(node, weight);
            below.insert(node, reached);
        }

        Ok(weights)
    }

    /// Methods sorted by descending weight, ties broken by insertion order.
    ///
    /// # Errors
    ///
    /// Same as [`calculate_weights`](Self::calculate_weights).
    pub fn ranked(&self) -> Result<Vec<(NodeIndex, i64)>> {
        let weights = self.calculate_weights()?;
        let mut ranked: Vec<(NodeIndex, i64)> = self
            .methods()
            .filter_map(|(node, _)| weights.get(&node).map(|w| (node, *w)))
            .collect();
        ranked.sort_by(|(a_node, a), (b_node, b)| b.cmp(a).then(a_node.cmp(b_node)));
        Ok(ranked)
    }

    fn base_weight(&self, node: NodeIndex) -> i64 {
        let dependents = i64::try_from(self.dependents(node).count()).unwrap_or(i64::MAX);
        let priority = self
            .method(node)
            .map_or(0, |method| i64::from(method.priority().value()));
        dependents.saturating_sub(priority)
    }

    /// Every method, each listed after all of its dependents.
    ///
    /// Iterative depth-first walk; `visiting` holds the current path with the
    /// dependents still to explore from each of its methods.
    fn dependents_first(&self) -> Result<Vec<NodeIndex>> {
        let mut order = Vec::with_capacity(self.method_count());
        let mut done = HashSet::new();

        for (root, _) in self.methods() {
            if done.contains(&root) {
                continue;
            }

            let mut visiting: Vec<(NodeIndex, Vec<NodeIndex>)> =
                vec![(root, self.dependents(root).collect())];
            let mut on_path = HashSet::from([root]);

            while let Some(top) = visiting.last_mut() {
                let current = top.0;
                match top.1.pop() {
                    Some(next) if done.contains(&next) => {}
                    Some(next) => {
                        if !on_path.insert(next) {
                            return Err(self.cycle_error(next, &visiting));
                        }
                        visiting.push((next, self.dependents(next).collect()));
                    }
                    None => {
                        visiting.pop();
                        on_path.remove(&current);
                        done.insert(current);
                        order.push(current);
                    }
                }
            }
        }

        Ok(order)
    }

    fn cycle_error(&self, node: NodeIndex, visiting: &[(NodeIndex, Vec<NodeIndex>)]) -> Error {
        let start = visiting.iter().position(|(n, _)| *n == node).unwrap_or(0);
        let cycle = visiting[start..]
            .iter()
            .map(|(n, _)| n)
            .chain(std::iter::once(&node))
            .filter_map(|n| self.method(*n))
            .map(ToString::to_string)
            .collect();
        Error::CycleDetected { cycle }
    }
}
