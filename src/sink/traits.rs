//! Trait abstraction for submission delivery to enable mocking in tests

use crate::state::SubmissionRecord;
use std::io;
use std::path::PathBuf;

/// Errors raised while handing a record to its destination
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write submission to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Receives the record once the wizard has been submitted
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Deliver one record. Only metadata is passed; never the file content.
    fn deliver(&mut self, record: &SubmissionRecord) -> Result<(), SinkError>;
}
