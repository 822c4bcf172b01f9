//! Analysis test cases.
//!
//! Every test case is a [`BuildContext`] driving one generation pass with a
//! perturbed configure order. Once the pass ran, the test case inspects the
//! outputs and yields the test cases to run next together with the orderings
//! it could pin down.
//!
//! The search narrows down in four stages:
//!
//! 1. [`FirstPass`] generates everything and records every tier of every type.
//! 2. [`TypeTestCase`] reverses every tier holding more than one step.
//! 3. [`PriorityTestCase`] reverses a single tier of a type that changed.
//! 4. [`MethodTestCase`] bisects where one step can be moved to before the
//!    output changes, which reveals its closest dependency.

mod composite;
mod first_pass;
mod method;
mod priority;
mod type_case;

pub(crate) use composite::AnalyzerComposite;
pub(crate) use first_pass::FirstPass;
pub(crate) use method::MethodTestCase;
pub(crate) use priority::PriorityTestCase;
pub(crate) use type_case::TypeTestCase;

use forgemake_configure_graph::ConfigureSignature;
use forgemake_model::{BuildContext, ConfigurePriority, GenerationOutputs};
use indexmap::IndexMap;
use std::fmt;

/// Step names of every tier of every type, in default execution order.
pub(crate) type TypeDefinitions = IndexMap<String, Tiers>;

/// Step names of every tier of one type.
pub(crate) type Tiers = IndexMap<ConfigurePriority, Vec<String>>;

/// What a finished test case leads to.
#[derive(Default)]
pub(crate) struct NextStep {
    pub tests: Vec<Box<dyn TestCase>>,
    pub suspected: Vec<ConfigureSignature>,
}

impl NextStep {
    pub fn extend(&mut self, other: Self) {
        self.tests.extend(other.tests);
        self.suspected.extend(other.suspected);
    }
}

/// A build context that knows how to continue the search.
pub(crate) trait TestCase: BuildContext + fmt::Display {
    /// Types whose outputs this test case looks at.
    fn target_types(&self) -> Vec<String>;

    /// Inspect the outputs of the pass this test case drove.
    fn next_step(&mut self, outputs: &GenerationOutputs) -> NextStep;
}

fn changed(outputs: &GenerationOutputs, project: &str) -> bool {
    outputs.get(project).is_some_and(|o| o.has_changed())
}
