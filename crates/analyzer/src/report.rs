//! One-call analysis entry point and its result.

use crate::{AnalyzerConfig, ConfigureDependencyAnalyzer, Result};
use forgemake_configure_graph::{
    ConfigureMethodInfo, ConfigureReport, ConfigureSignature, Weights,
};
use forgemake_model::{BuildContext, Builder, OutputStore, ProjectModel};
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of [`analyze_configure`].
#[derive(Debug)]
pub struct AnalysisReport {
    report: ConfigureReport,
    suspected: Vec<ConfigureSignature>,
    elapsed: Duration,
}

impl AnalysisReport {
    /// Every method involved in at least one suspected ordering.
    pub fn methods(&self) -> impl Iterator<Item = &ConfigureMethodInfo> {
        self.report.methods().map(|(_, method)| method)
    }

    /// Involved methods that depend on nothing else, the ones to fix first.
    pub fn roots(&self) -> impl Iterator<Item = &ConfigureMethodInfo> {
        self.report.roots().map(|(_, method)| method)
    }

    /// Weight of every involved method, keyed by its node in [`graph`](Self::graph).
    ///
    /// # Errors
    ///
    /// Fails when the findings form a cycle.
    pub fn weights(&self) -> Result<Weights> {
        Ok(self.report.calculate_weights()?)
    }

    /// Involved methods ordered by weight, heaviest first.
    ///
    /// # Errors
    ///
    /// Fails when the findings form a cycle.
    pub fn ranked(&self) -> Result<Vec<(&ConfigureMethodInfo, i64)>> {
        Ok(self
            .report
            .ranked()?
            .into_iter()
            .filter_map(|(node, weight)| self.report.method(node).map(|m| (m, weight)))
            .collect())
    }

    /// The dependency graph built from the findings.
    #[must_use]
    pub fn graph(&self) -> &ConfigureReport {
        &self.report
    }

    /// Raw findings in discovery order.
    #[must_use]
    pub fn suspected(&self) -> &[ConfigureSignature] {
        &self.suspected
    }

    /// Wall time of the whole analysis.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether no order dependence was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.report.is_empty()
    }
}

/// Analyze every generated type of a project model.
///
/// `builder_factory` is called once per pass and must return a builder over
/// the same model each time. Passes compare their files against the output
/// of the first one; nothing is written outside of memory.
///
/// # Errors
///
/// Fails when a generation pass fails, a progress message cannot be written,
/// or a finding cannot be resolved against the model.
pub fn analyze_configure<B>(
    mut builder_factory: B,
    config: &AnalyzerConfig,
    message_output: &mut dyn Write,
) -> Result<AnalysisReport>
where
    B: FnMut() -> Builder,
{
    let start = Instant::now();
    let mut store = OutputStore::new();
    let mut model: Option<Arc<ProjectModel>> = None;

    let suspected = {
        let mut analyzer = ConfigureDependencyAnalyzer::new(|context: &mut dyn BuildContext| {
            let builder = builder_factory();
            if model.is_none() {
                model = Some(Arc::clone(builder.model()));
            }
            builder.generate(context, &mut store)
        });
        analyzer.analyze(message_output, config.stop_on_first_error)?
    };

    let model = model.unwrap_or_default();
    let report = ConfigureReport::from_signatures(&model, &suspected)?;
    let elapsed = start.elapsed();

    info!(
        methods = report.method_count(),
        dependencies = report.dependency_count(),
        elapsed_ms = elapsed.as_millis(),
        "Configure analysis finished"
    );
    write!(message_output, "Analysis done in {:.3}s\n\n", elapsed.as_secs_f64())
        .map_err(|e| crate::Error::io(e, None, "writing analysis summary"))?;

    Ok(AnalysisReport {
        report,
        suspected,
        elapsed,
    })
}
