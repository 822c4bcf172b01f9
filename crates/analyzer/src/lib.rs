//! Configure dependency analysis for forgemake.
//!
//! Steps sharing a priority tier have no guaranteed relative order. This
//! crate reruns generation with those steps permuted, compares the produced
//! files against a reference pass and narrows every difference down to the
//! pair of steps responsible.
//!
//! # Example
//!
//! ```ignore
//! use forgemake_analyzer::{AnalyzerConfig, analyze_configure};
//!
//! let config = AnalyzerConfig::default();
//! let report = analyze_configure(|| Builder::new(model.clone()), &config, &mut std::io::stdout())?;
//!
//! for method in report.roots() {
//!     println!("{method} needs an explicit priority");
//! }
//! ```

mod analyzer;
mod cases;
mod config;
mod error;
mod report;
mod telemetry;

pub use analyzer::ConfigureDependencyAnalyzer;
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use report::{AnalysisReport, analyze_configure};
pub use telemetry::{TracingConfig, TracingFormat, init_tracing};

pub use forgemake_configure_graph::{
    ConfigureMethodInfo, ConfigureReport, ConfigureSignature, NodeIndex, Weights,
};
