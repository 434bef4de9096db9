// Public API exports
pub mod device;
pub mod job;
pub mod runner;
pub mod splitter;

// Re-export main types for convenience
pub use device::{Device, Matrix};
pub use job::{run_job, JobConfig};
pub use runner::{run_unit, ExecutionRecord};
pub use splitter::{split, split_text};
