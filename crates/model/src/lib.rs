//! Project model and generation passes for forgemake.
//!
//! Projects and solutions are described with [`ProjectDescriptor`]s holding
//! named, explicitly prioritised [`ConfigureStep`]s. A [`Builder`] runs the
//! steps of every generated type for every target and renders the resulting
//! [`Configuration`]s, steered by a [`BuildContext`].
//!
//! # Example
//!
//! ```ignore
//! use forgemake_model::*;
//! use std::sync::Arc;
//!
//! let app = ProjectDescriptor::project("App")
//!     .with_target(Target::new("debug"))
//!     .configure("Paths", |conf, target| {
//!         conf.set("output", format!("bin/{}", target.name()));
//!         Ok(())
//!     })?;
//!
//! let builder = Builder::new(Arc::new(ProjectModel::new().with(app)?));
//! let mut store = OutputStore::new();
//! let outputs = builder.generate(&mut GenerateAll::default(), &mut store)?;
//! ```

mod builder;
mod collection;
mod configuration;
mod context;
mod descriptor;
mod error;
mod model;
mod output;
mod priority;
mod target;

pub use builder::Builder;
pub use collection::{ConfigureCollection, MethodId, ResolvedConfigure};
pub use configuration::Configuration;
pub use context::{BuildContext, GenerateAll};
pub use descriptor::{ConfigureFn, ConfigureStep, ProjectDescriptor, ProjectKind, TargetPredicate};
pub use error::{Error, Result};
pub use model::ProjectModel;
pub use output::{GeneratedFile, GenerationOutput, GenerationOutputs, OutputStore};
pub use priority::ConfigurePriority;
pub use target::Target;
