use super::{NextStep, TestCase, changed};
use forgemake_configure_graph::ConfigureSignature;
use forgemake_model::{
    BuildContext, ConfigurePriority, GeneratedFile, GenerationOutputs, OutputStore,
    ResolvedConfigure,
};
use std::fmt;

/// Bisects how early one step may run before the output changes.
///
/// The step at position `max` is moved to `test_index`. A changed output
/// means it now runs before something it reads, so the search continues
/// above `test_index`; otherwise it continues below. When the window cannot
/// shrink any further, the step right at `min` is its closest dependency.
#[derive(Debug)]
pub(crate) struct MethodTestCase {
    project: String,
    priority: ConfigurePriority,
    methods: Vec<String>,
    method: String,
    max: usize,
    min: usize,
    test_index: usize,
}

impl MethodTestCase {
    /// Test cases for every step of a tier except the first one.
    ///
    /// A tier of exactly two steps that is known to be order dependent needs
    /// no search: the second depends on the first.
    pub fn create(project: &str, priority: ConfigurePriority, methods: &[String]) -> NextStep {
        match methods {
            [] | [_] => NextStep::default(),
            [first, last] => NextStep {
                tests: Vec::new(),
                suspected: vec![ConfigureSignature::new(project, priority, last, first)],
            },
            _ => NextStep {
                tests: methods
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(index, method)| {
                        Box::new(Self {
                            project: project.to_string(),
                            priority,
                            methods: methods.to_vec(),
                            method: method.clone(),
                            max: index,
                            min: 0,
                            test_index: 0,
                        }) as Box<dyn TestCase>
                    })
                    .collect(),
                suspected: Vec::new(),
            },
        }
    }

    /// Shrink the window after a pass where the output did or did not change.
    ///
    /// Yields the next case to run while the window can still shrink, and the
    /// closest dependency once it cannot.
    fn advance(&self, changed: bool) -> (Option<Self>, Option<ConfigureSignature>) {
        let (next_max, next_min) = if changed {
            (self.max, self.test_index)
        } else {
            (self.test_index, self.min)
        };
        let step = next_max.saturating_sub(next_min) / 2;

        if step != 0 {
            return (Some(self.narrowed(next_max, next_min, next_min + step)), None);
        }
        if !changed && self.test_index == 0 {
            return (None, None);
        }
        let suspected = self.methods.get(next_min).map(|dependency| {
            ConfigureSignature::new(
                self.project.clone(),
                self.priority,
                self.method.clone(),
                dependency.clone(),
            )
        });
        (None, suspected)
    }

    fn narrowed(&self, max: usize, min: usize, test_index: usize) -> Self {
        Self {
            project: self.project.clone(),
            priority: self.priority,
            methods: self.methods.clone(),
            method: self.method.clone(),
            max,
            min,
            test_index,
        }
    }
}

impl BuildContext for MethodTestCase {
    fn have_to_generate(&self, project: &str) -> bool {
        self.project == project
    }

    fn order_configure(
        &mut self,
        project: &str,
        priority: ConfigurePriority,
        configures: Vec<ResolvedConfigure>,
    ) -> Vec<ResolvedConfigure> {
        if self.project != project || self.priority != priority {
            return configures;
        }

        let mut reordered = Vec::with_capacity(configures.len());
        for configure in configures {
            if configure.signature() == self.method {
                reordered.insert(self.test_index.min(reordered.len()), configure);
            } else {
                reordered.push(configure);
            }
        }
        reordered
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

impl TestCase for MethodTestCase {
    fn target_types(&self) -> Vec<String> {
        vec![self.project.clone()]
    }

    fn next_step(&mut self, outputs: &GenerationOutputs) -> NextStep {
        let (narrowed, suspected) = self.advance(changed(outputs, &self.project));
        NextStep {
            tests: narrowed
                .into_iter()
                .map(|case| Box::new(case) as Box<dyn TestCase>)
                .collect(),
            suspected: suspected.into_iter().collect(),
        }
    }
}

impl fmt::Display for MethodTestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} at {}",
            self.project, self.priority, self.method, self.test_index
        )
    }
}
