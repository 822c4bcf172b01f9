//! Property-based tests for configure report invariants.
//!
//! These tests verify the behavioral contracts of the report:
//! - Caching a key twice yields the same node
//! - Recording an edge maintains both directions and is idempotent
//! - Weights are deterministic and count every transitive dependent once
//! - Cycles are rejected instead of looping

use forgemake_configure_graph::{ConfigureReport, Error, NodeIndex};
use forgemake_model::{ConfigurePriority, ConfigureStep, ProjectDescriptor, ProjectModel};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Fixtures
// =============================================================================

fn step_name(i: usize) -> String {
    format!("step_{i}")
}

/// One project with `count` default-priority steps.
fn model(count: usize) -> ProjectModel {
    let mut project = ProjectDescriptor::project("P");
    for i in 0..count {
        project
            .add_step(ConfigureStep::new(step_name(i), |_, _| Ok(())))
            .unwrap();
    }
    ProjectModel::new().with(project).unwrap()
}

fn build(model: &ProjectModel, count: usize, edges: &[(usize, usize)]) -> (ConfigureReport, Vec<NodeIndex>) {
    let mut report = ConfigureReport::new();
    let nodes: Vec<NodeIndex> = (0..count)
        .map(|i| {
            report
                .cache_in(model, "P", ConfigurePriority::DEFAULT, &step_name(i))
                .unwrap()
        })
        .collect();
    for &(from, to) in edges {
        report.add_dependent(nodes[from], nodes[to]).unwrap();
    }
    (report, nodes)
}

// =============================================================================
// Strategies for generating test data
// =============================================================================

/// Generate a DAG over `count` steps: edges only point from lower to higher
/// indices, so no cycle is possible.
fn dag_strategy(max_steps: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2..=max_steps).prop_flat_map(|count| {
        let edge = (0..count - 1).prop_flat_map(move |from| (Just(from), from + 1..count));
        (Just(count), proptest::collection::vec(edge, 0..count * 2))
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_cache_in_is_idempotent(count in 1_usize..8, pick in 0_usize..8) {
        let model = model(count);
        let name = step_name(pick % count);
        let mut report = ConfigureReport::new();

        let first = report.cache_in(&model, "P", ConfigurePriority::DEFAULT, &name).unwrap();
        let second = report.cache_in(&model, "P", ConfigurePriority::DEFAULT, &name).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(report.method_count(), 1);
    }

    #[test]
    fn prop_edges_are_bidirectional_sets((count, edges) in dag_strategy(8)) {
        let model = model(count);
        let (mut report, nodes) = build(&model, count, &edges);

        let unique: HashSet<(usize, usize)> = edges.iter().copied().collect();
        prop_assert_eq!(report.dependency_count(), unique.len());

        for &(from, to) in &unique {
            prop_assert!(report.dependents(nodes[from]).any(|n| n == nodes[to]));
            prop_assert!(report.dependencies(nodes[to]).any(|n| n == nodes[from]));
        }

        // Re-adding every edge changes nothing
        for &(from, to) in &edges {
            report.add_dependent(nodes[from], nodes[to]).unwrap();
        }
        prop_assert_eq!(report.dependency_count(), unique.len());
    }

    #[test]
    fn prop_weights_follow_definition((count, edges) in dag_strategy(8)) {
        let model = model(count);
        let (report, nodes) = build(&model, count, &edges);

        let weights = report.calculate_weights().unwrap();
        prop_assert_eq!(&weights, &report.calculate_weights().unwrap());
        prop_assert_eq!(weights.len(), count);

        let base = |node: NodeIndex| i64::try_from(report.dependents(node).count()).unwrap();
        for node in nodes {
            let mut reached = HashSet::new();
            let mut stack: Vec<NodeIndex> = report.dependents(node).collect();
            while let Some(next) = stack.pop() {
                if reached.insert(next) {
                    stack.extend(report.dependents(next));
                }
            }
            let expected = base(node) + reached.iter().map(|d| base(*d)).sum::<i64>();
            prop_assert_eq!(weights[&node], expected);
        }
    }

    #[test]
    fn prop_cycles_are_rejected(count in 2_usize..7) {
        let model = model(count);
        let mut edges: Vec<(usize, usize)> = (0..count - 1).map(|i| (i, i + 1)).collect();
        edges.push((count - 1, 0));
        let (report, _) = build(&model, count, &edges);

        prop_assert!(report.has_cycles());
        let is_cycle_error = matches!(report.calculate_weights(), Err(Error::CycleDetected { .. }));
        prop_assert!(is_cycle_error);
        prop_assert!(!report.validate().is_valid);
    }

    #[test]
    fn prop_roots_have_no_dependencies((count, edges) in dag_strategy(8)) {
        let model = model(count);
        let (report, _) = build(&model, count, &edges);

        let targets: HashSet<usize> = edges.iter().map(|(_, to)| *to).collect();
        let roots: Vec<NodeIndex> = report.roots().map(|(n, _)| n).collect();
        prop_assert_eq!(roots.len(), count - targets.len());
        for root in roots {
            prop_assert_eq!(report.dependencies(root).count(), 0);
        }
    }
}
