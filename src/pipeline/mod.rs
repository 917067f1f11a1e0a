// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod orchestrator;
pub mod progress;

pub use orchestrator::IngestPipeline;
pub use progress::IngestStats;
