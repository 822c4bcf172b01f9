//! Generation driver.

use crate::{
    BuildContext, ConfigureCollection, Configuration, GeneratedFile, GenerationOutput,
    GenerationOutputs, OutputStore, ProjectDescriptor, ProjectModel, Result,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs configure steps for every target of every generated type and
/// renders the resulting configurations.
#[derive(Debug, Clone)]
pub struct Builder {
    model: Arc<ProjectModel>,
}

impl Builder {
    /// Create a builder over a project model.
    #[must_use]
    pub fn new(model: Arc<ProjectModel>) -> Self {
        Self { model }
    }

    /// The model being generated.
    #[must_use]
    pub fn model(&self) -> &Arc<ProjectModel> {
        &self.model
    }

    /// Run one full generation pass.
    ///
    /// Failures raised by configure step bodies are recorded on the type's
    /// [`GenerationOutput`]; the pass carries on with the next type.
    ///
    /// # Errors
    ///
    /// Fails when the model itself is malformed (unknown base, cycle in the
    /// base chain) or a configuration cannot be rendered.
    pub fn generate(
        &self,
        context: &mut dyn BuildContext,
        store: &mut OutputStore,
    ) -> Result<GenerationOutputs> {
        let mut outputs = GenerationOutputs::new();

        for descriptor in self.model.generated_types() {
            if !context.have_to_generate(descriptor.name()) {
                continue;
            }

            let output = self.generate_type(descriptor, context, store)?;
            debug!(project = descriptor.name(), %output, "Generated type");
            outputs.insert(descriptor.name().to_string(), output);
        }

        Ok(outputs)
    }

    fn generate_type(
        &self,
        descriptor: &ProjectDescriptor,
        context: &mut dyn BuildContext,
        store: &mut OutputStore,
    ) -> Result<GenerationOutput> {
        let project = descriptor.name();
        let collection = ConfigureCollection::create(&self.model, project)?;

        let ordered: Vec<_> = collection
            .priorities()
            .flat_map(|(priority, configures)| {
                context.order_configure(project, priority, configures.to_vec())
            })
            .collect();

        let mut output = GenerationOutput::default();
        let mut files = Vec::with_capacity(descriptor.targets().len());

        for target in descriptor.targets() {
            let mut conf = Configuration::new(target.clone());
            for configure in ordered.iter().filter(|c| c.applies_to(target)) {
                if let Err(error) = (configure.body())(&mut conf, target) {
                    warn!(
                        project,
                        target = target.name(),
                        configure = %configure.id(),
                        %error,
                        "Configure failed"
                    );
                    output.error = Some(error);
                    return Ok(output);
                }
            }

            files.push(GeneratedFile {
                path: format!(
                    "{project}/{}.{}",
                    target.name(),
                    descriptor.kind().extension()
                ),
                content: conf.render()?,
            });
        }

        for file in files {
            if context.write_generated_file(project, &file, store) {
                output.generated.push(file.path);
            } else {
                output.skipped.push(file.path);
            }
        }

        Ok(output)
    }
}
