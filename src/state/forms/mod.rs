//! Form domain layer
//!
//! The intake wizard's state, its validation rules and the controller that
//! hands completed records to a sink.

mod attachment;
mod controller;
mod field;
mod form_state;
mod record;
mod validation;

pub use attachment::{Attachment, AttachmentKind, ACCEPTED_EXTENSIONS};
pub use controller::FormController;
pub use field::{Field, Step, TextField, PROGRAM_CATALOG};
pub use record::SubmissionRecord;

#[cfg(test)]
pub use form_state::FormState;
#[cfg(test)]
pub use record::AttachmentRecord;
