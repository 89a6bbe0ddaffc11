//! Submission sinks: where a completed intake record goes

mod json_lines;
mod traits;
mod tracing_sink;

pub use json_lines::JsonLinesSink;
pub use traits::{SinkError, SubmissionSink};
pub use tracing_sink::TracingSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::config::IntakeConfig;

/// Build the sink selected by configuration
pub fn from_config(config: &IntakeConfig) -> Box<dyn SubmissionSink> {
    match &config.submission_log {
        Some(path) => {
            tracing::info!("Writing submissions to {}", path.display());
            Box::new(JsonLinesSink::new(path.clone()))
        }
        None => Box::new(TracingSink),
    }
}
