//! Sink that emits submissions as structured log events

use super::traits::{SinkError, SubmissionSink};
use crate::state::SubmissionRecord;

/// Logs each record at info level under the `intake_tui::submission` target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn deliver(&mut self, record: &SubmissionRecord) -> Result<(), SinkError> {
        let body = serde_json::to_string(record)?;
        tracing::info!(
            target: "intake_tui::submission",
            program = %record.program,
            has_file = record.file.is_some(),
            "Form Submission Data: {body}"
        );
        Ok(())
    }
}
