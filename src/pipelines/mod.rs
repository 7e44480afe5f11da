//! Pipelines.
//!
//! Various pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod dialogue;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use dialogue::{Partitioned, PipelineConfig, Sequential, Summary};
pub use pipeline::Pipeline;
