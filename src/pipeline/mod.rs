//! Generation pipeline: scan, index, resolve, emit

pub mod orchestrator;
pub mod plan;

pub use orchestrator::{GeneratedFile, GenerationReport, PipelineOrchestrator};
pub use plan::{plan_builds, PlannedBuild};
