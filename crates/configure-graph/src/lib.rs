//! Configure method dependency graph for forgemake.
//!
//! This crate turns raw ordering findings ([`ConfigureSignature`]) into a
//! deduplicated, bidirectional graph of [`ConfigureMethodInfo`] nodes using
//! petgraph, and ranks methods by how many other methods depend on them.
//!
//! # Key Types
//!
//! - [`ConfigureReport`]: the graph, with `cache_in`, `add_dependent` and weighting
//! - [`ConfigureMethodInfo`]: one configure method, resolved across the base chain
//! - [`ConfigureSignature`]: one suspected ordering emitted by the analyzer
//!
//! # Example
//!
//! ```ignore
//! use forgemake_configure_graph::{ConfigureReport, ConfigureSignature};
//!
//! let findings = vec![ConfigureSignature::new("App", ConfigurePriority::DEFAULT, "Foo", "Bar")];
//! let report = ConfigureReport::from_signatures(&model, &findings)?;
//!
//! // Bar has to run first
//! let roots: Vec<_> = report.roots().collect();
//! let ranked = report.ranked()?;
//! ```

mod error;
mod method;
mod report;
mod signature;
mod validation;
mod weights;

pub use error::{Error, Result};
pub use method::{ConfigureMethodInfo, get_ancestors_with_method};
pub use petgraph::graph::NodeIndex;
pub use report::ConfigureReport;
pub use signature::ConfigureSignature;
pub use validation::ValidationResult;
pub use weights::Weights;
