use super::{MethodTestCase, NextStep, TestCase, Tiers, changed};
use forgemake_model::{
    BuildContext, ConfigurePriority, GeneratedFile, GenerationOutputs, OutputStore,
    ResolvedConfigure,
};
use std::fmt;

/// Reverses a single tier of one type.
#[derive(Debug)]
pub(crate) struct PriorityTestCase {
    project: String,
    priority: ConfigurePriority,
    methods: Vec<String>,
}

impl PriorityTestCase {
    /// Test cases isolating the ambiguous tiers of `project`.
    ///
    /// With a single tier there is nothing to isolate and the search moves
    /// straight on to its methods.
    pub fn create(project: &str, tiers: &Tiers) -> NextStep {
        if let (1, Some((priority, methods))) = (tiers.len(), tiers.first()) {
            return MethodTestCase::create(project, *priority, methods);
        }

        NextStep {
            tests: tiers
                .iter()
                .map(|(priority, methods)| {
                    Box::new(Self {
                        project: project.to_string(),
                        priority: *priority,
                        methods: methods.clone(),
                    }) as Box<dyn TestCase>
                })
                .collect(),
            suspected: Vec::new(),
        }
    }

    fn is_target(&self, project: &str, priority: ConfigurePriority) -> bool {
        self.project == project && self.priority == priority
    }
}

impl BuildContext for PriorityTestCase {
    fn have_to_generate(&self, project: &str) -> bool {
        self.project == project
    }

    fn order_configure(
        &mut self,
        project: &str,
        priority: ConfigurePriority,
        mut configures: Vec<ResolvedConfigure>,
    ) -> Vec<ResolvedConfigure> {
        if self.is_target(project, priority) {
            configures.reverse();
        }
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

impl TestCase for PriorityTestCase {
    fn target_types(&self) -> Vec<String> {
        vec![self.project.clone()]
    }

    fn next_step(&mut self, outputs: &GenerationOutputs) -> NextStep {
        if changed(outputs, &self.project) {
            MethodTestCase::create(&self.project, self.priority, &self.methods)
        } else {
            NextStep::default()
        }
    }
}

impl fmt::Display for PriorityTestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.project, self.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_one_case_per_tier() {
        let tiers: Tiers = [
            (ConfigurePriority(-1), names(&["A", "B"])),
            (ConfigurePriority(1), names(&["C", "D", "E"])),
        ]
        .into_iter()
        .collect();

        let next = PriorityTestCase::create("App", &tiers);
        assert!(next.suspected.is_empty());
        let shown: Vec<String> = next.tests.iter().map(ToString::to_string).collect();
        assert_eq!(shown, vec!["App.-1", "App.1"]);
    }

    #[test]
    fn test_single_tier_skips_to_methods() {
        let tiers: Tiers = [(ConfigurePriority::DEFAULT, names(&["A", "B", "C"]))]
            .into_iter()
            .collect();

        let next = PriorityTestCase::create("App", &tiers);
        assert_eq!(next.tests.len(), 2);
        assert!(next.tests.iter().all(|t| t.to_string().starts_with("App.0.")));
    }
}
