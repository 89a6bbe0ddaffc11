//! Submission record handed to the sink

use super::attachment::Attachment;
use super::form_state::FormFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attachment metadata as it appears in a submitted record. File content is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRecord {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Milliseconds since the Unix epoch
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_modified: DateTime<Utc>,
}

impl From<&Attachment> for AttachmentRecord {
    fn from(attachment: &Attachment) -> Self {
        Self {
            name: attachment.display_name.clone(),
            size: attachment.byte_size,
            mime_type: attachment.mime_type.clone(),
            last_modified: attachment.last_modified,
        }
    }
}

/// Everything collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub program: String,
    pub file: Option<AttachmentRecord>,
}

impl From<&FormFields> for SubmissionRecord {
    fn from(fields: &FormFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            program: fields.program.clone(),
            file: fields.file.as_ref().map(AttachmentRecord::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_serializes_with_wire_keys() {
        let modified = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let fields = FormFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            program: "Asset Tracking Program".to_string(),
            file: Some(Attachment::new("scan.png", 1_048_576, "image/png", modified)),
        };

        let value = serde_json::to_value(SubmissionRecord::from(&fields)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "program": "Asset Tracking Program",
                "file": {
                    "name": "scan.png",
                    "size": 1048576,
                    "type": "image/png",
                    "lastModified": 1700000000123i64,
                }
            })
        );
    }

    #[test]
    fn test_missing_file_serializes_as_null() {
        let value = serde_json::to_value(SubmissionRecord::from(&FormFields::default())).unwrap();
        assert!(value["file"].is_null());
    }
}
