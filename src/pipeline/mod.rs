// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod capability;
mod coordinator;
mod progress;

pub use capability::{Notifier, Store, Validator};
pub use coordinator::{Outcome, Pipeline};
pub use progress::{PipelineStats, ProgressTracker};
