//! Wizard state snapshot and its transitions
//!
//! `FormState` is immutable from the outside: every operation consumes the
//! current snapshot and returns the next one.

use super::attachment::Attachment;
use super::field::{Field, Step, TextField};
use super::record::SubmissionRecord;
use super::validation::{self, FieldErrors};

/// Values collected across all steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub program: String,
    pub file: Option<Attachment>,
}

impl FormFields {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Program => &self.program,
        }
    }
}

/// Snapshot of the intake wizard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    step: Step,
    fields: FormFields,
    errors: FieldErrors,
    submitted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Overwrite one text field. Never validates.
    pub fn set_field(mut self, field: TextField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            TextField::Name => self.fields.name = value,
            TextField::Email => self.fields.email = value,
            TextField::Program => self.fields.program = value,
        }
        self
    }

    /// Replace the attachment and validate it right away.
    ///
    /// Only the `file` error entry is touched. Clearing the selection leaves
    /// errors as they are.
    pub fn set_attachment(mut self, file: Option<Attachment>) -> Self {
        if let Some(attachment) = &file {
            match validation::validate_attachment(attachment) {
                Ok(()) => self.errors.remove(Field::File),
                Err(e) => self.errors.insert(Field::File, e),
            }
        }
        self.fields.file = file;
        self
    }

    /// Errors for the fields belonging to `step`; empty iff the step is valid
    pub fn validate_step(&self, step: Step) -> FieldErrors {
        validation::validate_step(&self.fields, step)
    }

    /// Move forward if the current step validates, otherwise record its errors
    pub fn advance(mut self) -> Self {
        let errors = self.validate_step(self.step);
        if errors.is_empty() {
            self.step = self.step.next();
        }
        self.errors = errors;
        self
    }

    /// Move back one step and drop all errors without re-validating
    pub fn retreat(mut self) -> Self {
        self.step = self.step.prev();
        self.errors = FieldErrors::new();
        self
    }

    /// Validate the upload step and, if it passes, mark the form submitted.
    ///
    /// The returned record is `Some` only for the transition into the
    /// submitted state; a form that is already submitted yields `None`.
    pub fn submit(mut self) -> (Self, Option<SubmissionRecord>) {
        if self.submitted {
            return (self, None);
        }

        let errors = self.validate_step(Step::DocumentUpload);
        if !errors.is_empty() {
            self.errors = errors;
            return (self, None);
        }

        self.errors = errors;
        self.submitted = true;
        let record = SubmissionRecord::from(&self.fields);
        (self, Some(record))
    }

    /// Back to the initial empty form
    pub fn reset(self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validation::{ValidationError, MAX_UPLOAD_BYTES};
    use chrono::Utc;

    fn png(byte_size: u64) -> Attachment {
        Attachment::new("scan.png", byte_size, "image/png", Utc::now())
    }

    /// A state sitting on the upload step with valid earlier steps
    fn at_upload_step() -> FormState {
        FormState::new()
            .set_field(TextField::Name, "Jane Doe")
            .set_field(TextField::Email, "jane@example.com")
            .advance()
            .set_field(TextField::Program, "Warehouse Management")
            .advance()
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_is_empty() {
            let state = FormState::new();
            assert_eq!(state.step(), Step::PersonalInfo);
            assert_eq!(state.fields(), &FormFields::default());
            assert!(state.errors().is_empty());
            assert!(!state.is_submitted());
        }
    }

    mod set_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_overwrites_without_validating() {
            let state = FormState::new()
                .set_field(TextField::Email, "not-an-email")
                .set_field(TextField::Name, "");
            assert_eq!(state.fields().email, "not-an-email");
            assert!(state.errors().is_empty());
        }

        #[test]
        fn test_text_accessor() {
            let state = FormState::new().set_field(TextField::Program, "anything");
            assert_eq!(state.fields().text(TextField::Program), "anything");
        }
    }

    mod set_attachment {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_attachment_sets_file_error() {
            let state = FormState::new().set_attachment(Some(png(MAX_UPLOAD_BYTES + 1)));
            assert_eq!(state.errors().get(Field::File), Some(&ValidationError::FileTooLarge));
            assert!(state.fields().file.is_some());
        }

        #[test]
        fn test_valid_attachment_clears_only_file_error() {
            let state = at_upload_step().submit().0;
            assert!(state.errors().contains(Field::File));

            let state = state.set_attachment(Some(png(10)));
            assert!(state.errors().is_empty());
        }

        #[test]
        fn test_keeps_other_errors() {
            let state = FormState::new().advance();
            assert!(state.errors().contains(Field::Name));

            let state = state.set_attachment(Some(png(10)));
            assert!(state.errors().contains(Field::Name));
            assert!(state.errors().contains(Field::Email));
            assert!(!state.errors().contains(Field::File));
        }

        #[test]
        fn test_reselection_replaces_attachment() {
            let state = FormState::new()
                .set_attachment(Some(png(10)))
                .set_attachment(Some(Attachment::new("b.pdf", 20, "application/pdf", Utc::now())));
            assert_eq!(state.fields().file.as_ref().unwrap().display_name, "b.pdf");
        }

        #[test]
        fn test_clearing_leaves_errors_untouched() {
            let state = FormState::new()
                .set_attachment(Some(Attachment::new("a.txt", 1, "text/plain", Utc::now())))
                .set_attachment(None);
            assert!(state.fields().file.is_none());
            assert_eq!(state.errors().get(Field::File), Some(&ValidationError::InvalidFileType));
        }
    }

    mod advance {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blocked_by_missing_name() {
            let state = FormState::new()
                .set_field(TextField::Name, "")
                .set_field(TextField::Email, "a@b.com")
                .advance();
            assert_eq!(state.step(), Step::PersonalInfo);
            assert_eq!(state.errors().len(), 1);
            assert_eq!(state.errors().message(Field::Name).as_deref(), Some("Name is required"));
        }

        #[test]
        fn test_moves_to_program_selection() {
            let state = FormState::new()
                .set_field(TextField::Name, "Jane Doe")
                .set_field(TextField::Email, "jane@example.com")
                .advance();
            assert_eq!(state.step(), Step::ProgramSelection);
            assert!(state.errors().is_empty());
        }

        #[test]
        fn test_success_clears_previous_errors() {
            let state = FormState::new()
                .advance()
                .set_field(TextField::Name, "Jane Doe")
                .set_field(TextField::Email, "jane@example.com")
                .advance();
            assert!(state.errors().is_empty());
        }

        #[test]
        fn test_capped_at_upload_step() {
            let state = at_upload_step().set_attachment(Some(png(10))).advance();
            assert_eq!(state.step(), Step::DocumentUpload);
            assert!(state.errors().is_empty());
        }

        #[test]
        fn test_program_must_be_in_catalog() {
            let state = FormState::new()
                .set_field(TextField::Name, "Jane Doe")
                .set_field(TextField::Email, "jane@example.com")
                .advance()
                .set_field(TextField::Program, "Something Else")
                .advance();
            assert_eq!(state.step(), Step::ProgramSelection);
            assert_eq!(state.errors().get(Field::Program), Some(&ValidationError::NotInCatalog));
        }
    }

    mod retreat {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clears_errors_without_revalidating() {
            let state = at_upload_step()
                .retreat()
                .set_field(TextField::Program, "")
                .advance();
            assert!(state.errors().contains(Field::Program));

            let state = state.set_field(TextField::Name, "").retreat();
            assert_eq!(state.step(), Step::PersonalInfo);
            assert!(state.errors().is_empty());
        }

        #[test]
        fn test_floored_at_first_step() {
            let state = FormState::new().retreat();
            assert_eq!(state.step(), Step::PersonalInfo);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_upload_emits_record() {
            let (state, record) = at_upload_step().set_attachment(Some(png(1_048_576))).submit();
            assert!(state.is_submitted());
            assert!(state.errors().is_empty());

            let record = record.unwrap();
            assert_eq!(record.name, "Jane Doe");
            assert_eq!(record.email, "jane@example.com");
            assert_eq!(record.program, "Warehouse Management");
            let file = record.file.unwrap();
            assert_eq!(file.size, 1_048_576);
            assert_eq!(file.mime_type, "image/png");
            assert_eq!(file.name, "scan.png");
        }

        #[test]
        fn test_missing_file_blocks_submission() {
            let (state, record) = at_upload_step().submit();
            assert!(record.is_none());
            assert!(!state.is_submitted());
            assert_eq!(
                state.errors().message(Field::File).as_deref(),
                Some("Please upload a file")
            );
        }

        #[test]
        fn test_second_submit_emits_nothing() {
            let (state, _) = at_upload_step().set_attachment(Some(png(10))).submit();
            let (state, record) = state.submit();
            assert!(state.is_submitted());
            assert!(record.is_none());
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_restores_defaults_after_submission() {
            let (state, _) = at_upload_step().set_attachment(Some(png(10))).submit();
            let state = state.reset();
            assert_eq!(state, FormState::default());
            assert_eq!(state.step(), Step::PersonalInfo);
            assert!(state.fields().file.is_none());
            assert!(!state.is_submitted());
        }
    }
}
