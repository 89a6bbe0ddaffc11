//! Form state controller
//!
//! Owns the current `FormState` snapshot and the submission sink. All
//! transitions are delegated to the snapshot; the only side effect here is
//! handing the record to the sink on submit.

use super::attachment::Attachment;
use super::field::{Step, TextField};
use super::form_state::FormState;
use super::validation::FieldErrors;
use crate::sink::{SinkError, SubmissionSink};

pub struct FormController {
    state: FormState,
    sink: Box<dyn SubmissionSink>,
}

impl FormController {
    pub fn new(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: FormState::new(),
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    fn apply(&mut self, transition: impl FnOnce(FormState) -> FormState) {
        let state = std::mem::take(&mut self.state);
        self.state = transition(state);
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        self.apply(|s| s.set_field(field, value));
    }

    pub fn set_attachment(&mut self, file: Option<Attachment>) {
        if let Some(attachment) = &file {
            tracing::debug!(
                "Attachment selected: {} ({} bytes, {:?})",
                attachment.display_name,
                attachment.byte_size,
                attachment.mime_type
            );
        }
        self.apply(|s| s.set_attachment(file));
    }

    pub fn validate_step(&self, step: Step) -> FieldErrors {
        self.state.validate_step(step)
    }

    /// Returns true if the step changed
    pub fn advance(&mut self) -> bool {
        let before = self.state.step();
        self.apply(FormState::advance);
        let moved = self.state.step() != before;
        if moved {
            tracing::debug!("Advanced to step {}", self.state.step().number());
        } else {
            tracing::debug!(
                "Step {} has {} validation error(s)",
                before.number(),
                self.state.errors().len()
            );
        }
        moved
    }

    pub fn retreat(&mut self) {
        self.apply(FormState::retreat);
    }

    /// Submit the form.
    ///
    /// Returns `Ok(true)` once the record has been delivered. Validation
    /// failures return `Ok(false)` with errors stored on the state. If the
    /// sink fails, the state is left exactly as it was before the call.
    pub fn submit(&mut self) -> Result<bool, SinkError> {
        let previous = self.state.clone();
        let (next, record) = std::mem::take(&mut self.state).submit();

        let Some(record) = record else {
            self.state = next;
            return Ok(self.state.is_submitted());
        };

        if let Err(e) = self.sink.deliver(&record) {
            tracing::warn!("Submission delivery failed: {e}");
            self.state = previous;
            return Err(e);
        }

        tracing::info!("Intake form submitted for program {:?}", record.program);
        self.state = next;
        Ok(true)
    }

    pub fn reset(&mut self) {
        self.apply(FormState::reset);
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
