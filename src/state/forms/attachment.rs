//! Attachment reference built from a file on disk

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions offered by the upload step
pub const ACCEPTED_EXTENSIONS: [&str; 4] = [".pdf", ".png", ".jpg", ".jpeg"];

/// Errors raised while reading an attachment from disk
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rough classification used to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Pdf,
    Image,
}

/// Metadata describing the single uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub display_name: String,
    pub byte_size: u64,
    pub mime_type: String,
    pub last_modified: DateTime<Utc>,
}

impl Attachment {
    pub fn new(
        display_name: impl Into<String>,
        byte_size: u64,
        mime_type: impl Into<String>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            byte_size,
            mime_type: mime_type.into(),
            last_modified,
        }
    }

    /// Read size and modification time from the filesystem.
    ///
    /// The MIME type comes from the extension only; the content is never read.
    pub fn from_path(path: &Path) -> Result<Self, AttachmentError> {
        let metadata = fs::metadata(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AttachmentError::NotFound(path.to_path_buf())
            } else {
                AttachmentError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(AttachmentError::NotAFile(path.to_path_buf()));
        }

        let last_modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(
            display_name,
            metadata.len(),
            mime_type_for_path(path),
            last_modified,
        ))
    }

    pub fn kind(&self) -> AttachmentKind {
        if self.mime_type == "application/pdf" {
            AttachmentKind::Pdf
        } else {
            AttachmentKind::Image
        }
    }
}

/// MIME type for an accepted extension, or empty when unknown
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "",
    }
}
