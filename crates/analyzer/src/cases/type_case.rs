use super::{NextStep, PriorityTestCase, TestCase, TypeDefinitions, changed};
use forgemake_model::{
    BuildContext, ConfigurePriority, GeneratedFile, GenerationOutputs, OutputStore,
    ResolvedConfigure,
};
use std::fmt;

/// Reverses every ambiguous tier of every type at once.
///
/// A type whose output stays identical has no order dependence and drops
/// out of the search.
#[derive(Debug)]
pub(crate) struct TypeTestCase {
    to_analyze: TypeDefinitions,
}

impl TypeTestCase {
    /// Keep only the tiers holding more than one step.
    pub fn new(definitions: &TypeDefinitions) -> Self {
        let to_analyze = definitions
            .iter()
            .filter_map(|(project, tiers)| {
                let ambiguous: super::Tiers = tiers
                    .iter()
                    .filter(|(_, methods)| methods.len() > 1)
                    .map(|(priority, methods)| (*priority, methods.clone()))
                    .collect();
                (!ambiguous.is_empty()).then(|| (project.clone(), ambiguous))
            })
            .collect();
        Self { to_analyze }
    }
}

impl BuildContext for TypeTestCase {
    fn have_to_generate(&self, project: &str) -> bool {
        self.to_analyze.contains_key(project)
    }

    fn order_configure(
        &mut self,
        _project: &str,
        _priority: ConfigurePriority,
        mut configures: Vec<ResolvedConfigure>,
    ) -> Vec<ResolvedConfigure> {
        configures.reverse();
        configures
    }

    fn write_generated_file(
        &mut self,
        _project: &str,
        file: &GeneratedFile,
        store: &mut OutputStore,
    ) -> bool {
        store.is_different(file)
    }
}

impl TestCase for TypeTestCase {
    fn target_types(&self) -> Vec<String> {
        self.to_analyze.keys().cloned().collect()
    }

    fn next_step(&mut self, outputs: &GenerationOutputs) -> NextStep {
        let mut next = NextStep::default();
        for (project, tiers) in &self.to_analyze {
            if changed(outputs, project) {
                next.extend(PriorityTestCase::create(project, tiers));
            }
        }
        next
    }
}

impl fmt::Display for TypeTestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.to_analyze.keys().map(String::as_str).collect();
        f.write_str(&names.join("\n"))
    }
}
