//! Field validation rules for each wizard step

use super::attachment::Attachment;
use super::field::{is_catalog_program, Field, Step};
use super::form_state::FormFields;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Upload size limit (5 MiB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types accepted by the upload step
pub const ALLOWED_MIME_TYPES: [&str; 4] =
    ["application/pdf", "image/png", "image/jpeg", "image/jpg"];

/// A field-scoped validation failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", required_message(.0))]
    Required(Field),
    #[error("Please enter a valid email address")]
    MalformedEmail,
    #[error("Please select a program")]
    NotInCatalog,
    #[error("Please upload a PDF, PNG, or JPG file")]
    InvalidFileType,
    #[error("File size must be less than 5MB")]
    FileTooLarge,
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::Name => "Name is required",
        Field::Email => "Email is required",
        Field::Program => "Please select a program",
        Field::File => "Please upload a file",
    }
}

/// Per-field errors produced by the most recent validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// User-facing message for a field, if it has an error
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl FromIterator<(Field, ValidationError)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (Field, ValidationError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
            .expect("valid email pattern")
    })
}

/// Unicode whitespace plus the byte order mark, which browsers also strip
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Matches `local@domain.tld`; intentionally loose.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Type is checked before size; only the first failure is reported.
pub fn validate_attachment(attachment: &Attachment) -> Result<(), ValidationError> {
    if !ALLOWED_MIME_TYPES.contains(&attachment.mime_type.as_str()) {
        return Err(ValidationError::InvalidFileType);
    }
    if attachment.byte_size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

/// Validate only the fields that belong to `step`
pub fn validate_step(fields: &FormFields, step: Step) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        Step::PersonalInfo => {
            if is_blank(&fields.name) {
                errors.insert(Field::Name, ValidationError::Required(Field::Name));
            }
            if is_blank(&fields.email) {
                errors.insert(Field::Email, ValidationError::Required(Field::Email));
            } else if !is_valid_email(&fields.email) {
                errors.insert(Field::Email, ValidationError::MalformedEmail);
            }
        }
        Step::ProgramSelection => {
            if !is_catalog_program(&fields.program) {
                errors.insert(Field::Program, ValidationError::NotInCatalog);
            }
        }
        Step::DocumentUpload => match &fields.file {
            None => errors.insert(Field::File, ValidationError::Required(Field::File)),
            Some(attachment) => {
                if let Err(e) = validate_attachment(attachment) {
                    errors.insert(Field::File, e);
                }
            }
        },
    }

    errors
}
