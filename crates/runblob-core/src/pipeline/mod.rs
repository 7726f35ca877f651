pub mod config;
mod orchestrator;
mod types;

pub use config::BlobConfig;
pub use orchestrator::BlobPipeline;
pub use types::FrameSummary;
