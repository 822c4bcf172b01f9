use super::{NextStep, TestCase};
use forgemake_model::{
    BuildContext, ConfigurePriority, GeneratedFile, GenerationOutputs, OutputStore,
    ResolvedConfigure,
};
use std::collections::BTreeSet;
use std::fmt;

/// Runs several test cases in one generation pass.
///
/// Members never share a target type, so each type is steered by exactly
/// one of them.
#[derive(Default)]
pub(crate) struct AnalyzerComposite {
    analyzers: Vec<Box<dyn TestCase>>,
}

impl AnalyzerComposite {
    pub fn new(analyzer: Box<dyn TestCase>) -> Self {
        Self {
            analyzers: vec![analyzer],
        }
    }

    /// Whether `analyzer` shares no target type with the current members.
    pub fn accepts(&self, analyzer: &dyn TestCase) -> bool {
        let types = self.target_types();
        analyzer.target_types().iter().all(|t| !types.contains(t))
    }

    pub fn push(&mut self, analyzer: Box<dyn TestCase>) {
        self.analyzers.push(analyzer);
    }

    fn analyzer_for(&mut self, project: &str) -> Option<&mut Box<dyn TestCase>> {
        self.analyzers
            .iter_mut()
            .find(|a| a.have_to_generate(project))
    }
}

impl BuildContext for AnalyzerComposite {
    fn have_to_generate(&self, project: &str) -> bool {
        self.analyzers.iter().any(|a| a.have_to_generate(project))
    }

    fn order_configure(
        &mut self,
        project: &str,
        priority: ConfigurePriority,
        configures: Vec<ResolvedConfigure>,
    ) -> Vec<ResolvedConfigure> {
        match self.analyzer_for(project) {
            Some(analyzer) => analyzer.order_configure(project, priority, configures),
            None => configures,
        }
    }

    fn write_generated_file(
        &mut self,
        project: &str,
        file: &GeneratedFile,
        store: &mut OutputStore,
    ) -> bool {
        self.analyzers.iter_mut().any(|a| {
            a.target_types().iter().any(|t| t == project)
                && a.write_generated_file(project, file, store)
        })
    }
}

impl TestCase for AnalyzerComposite {
    fn target_types(&self) -> Vec<String> {
        self.analyzers
            .iter()
            .flat_map(|a| a.target_types())
            .collect()
    }

    fn next_step(&mut self, outputs: &GenerationOutputs) -> NextStep {
        let mut next = NextStep::default();
        for analyzer in &mut self.analyzers {
            if analyzer
                .target_types()
                .iter()
                .any(|t| outputs.contains_key(t))
            {
                next.extend(analyzer.next_step(outputs));
            }
        }
        next
    }
}

impl fmt::Display for AnalyzerComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: BTreeSet<String> = self.analyzers.iter().map(ToString::to_string).collect();
        let lines: Vec<String> = lines.into_iter().collect();
        f.write_str(&lines.join("\n"))
    }
}
