use super::{NextStep, TestCase, TypeDefinitions, TypeTestCase};
use forgemake_model::{BuildContext, ConfigurePriority, GenerationOutputs, ResolvedConfigure};
use std::fmt;

/// Plain generation pass producing the reference outputs.
///
/// Runs every step in its default order, writes the results to the store and
/// records the tiers of every type it saw.
#[derive(Debug, Default)]
pub(crate) struct FirstPass {
    type_definitions: TypeDefinitions,
}

impl FirstPass {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildContext for FirstPass {
    fn order_configure(
        &mut self,
        project: &str,
        priority: ConfigurePriority,
        configures: Vec<ResolvedConfigure>,
    ) -> Vec<ResolvedConfigure> {
        self.type_definitions
            .entry(project.to_string())
            .or_default()
            .entry(priority)
            .or_insert_with(|| configures.iter().map(|c| c.signature().to_string()).collect());
        configures
    }
}

impl TestCase for FirstPass {
    fn target_types(&self) -> Vec<String> {
        self.type_definitions.keys().cloned().collect()
    }

    fn next_step(&mut self, outputs: &GenerationOutputs) -> NextStep {
        self.type_definitions
            .retain(|project, _| outputs.contains_key(project));

        NextStep {
            tests: vec![Box::new(TypeTestCase::new(&self.type_definitions))],
            suspected: Vec::new(),
        }
    }
}

impl fmt::Display for FirstPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("First pass analyze")
    }
}
