//! The pass-driving loop.

use crate::cases::{AnalyzerComposite, FirstPass, TestCase};
use crate::{Error, Result};
use forgemake_configure_graph::ConfigureSignature;
use forgemake_model::{BuildContext, GenerationOutputs};
use std::collections::VecDeque;
use std::io::Write;
use tracing::{debug, info};

/// Finds configure steps whose relative order matters.
///
/// `generation` runs one full generation pass under the given context. Every
/// call must start from the same model and compare against the same output
/// store, so that a change in output can only come from the reordering the
/// context applied.
pub struct ConfigureDependencyAnalyzer<F> {
    generation: F,
}

impl<F> ConfigureDependencyAnalyzer<F>
where
    F: FnMut(&mut dyn BuildContext) -> forgemake_model::Result<GenerationOutputs>,
{
    /// Create an analyzer over a generation callback.
    pub fn new(generation: F) -> Self {
        Self { generation }
    }

    /// Run passes until no test case is left.
    ///
    /// Each pass writes a description of what it tested to `message_output`.
    /// With `stop_on_first_error`, analysis ends after the first pass that
    /// produced a suspected pair.
    ///
    /// # Errors
    ///
    /// Fails when a generation pass fails or a message cannot be written.
    pub fn analyze(
        &mut self,
        message_output: &mut dyn Write,
        stop_on_first_error: bool,
    ) -> Result<Vec<ConfigureSignature>> {
        let mut suspected = Vec::new();
        let mut tests = VecDeque::from([AnalyzerComposite::new(Box::new(FirstPass::new()))]);
        let mut pass = 0_usize;

        while let Some(mut current) = tests.pop_front() {
            pass += 1;
            debug!(pass, test = %current, "Starting analysis pass");

            let outputs = (self.generation)(&mut current)?;
            let next = current.next_step(&outputs);
            let found = next.suspected.len();

            for test in next.tests {
                add_analyzer(&mut tests, test);
            }
            suspected.extend(next.suspected);

            let tested = current.target_types().len();
            info!(
                pass,
                tested,
                found,
                suspected = suspected.len(),
                pending = tests.len(),
                "Analysis pass complete"
            );
            write!(
                message_output,
                "{current}\n{tested} types tested, {} suspected methods\n\n",
                suspected.len()
            )
            .map_err(|e| Error::io(e, None, "writing analysis progress"))?;

            if stop_on_first_error && found > 0 {
                info!(pass, "Stopping on first suspected ordering");
                break;
            }
        }

        Ok(suspected)
    }
}

/// Queue `analyzer` in the first pass it shares no type with.
fn add_analyzer(tests: &mut VecDeque<AnalyzerComposite>, analyzer: Box<dyn TestCase>) {
    match tests.iter_mut().find(|c| c.accepts(analyzer.as_ref())) {
        Some(composite) => composite.push(analyzer),
        None => tests.push_back(AnalyzerComposite::new(analyzer)),
    }
}
