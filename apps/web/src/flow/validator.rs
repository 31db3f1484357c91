use thiserror::Error;

/// Upload size ceiling in bytes (16 MiB).
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_DOC: &str = "application/msword";

const ALLOWED_MEDIA_TYPES: &[&str] = &[MIME_PDF, MIME_DOCX, MIME_DOC];

/// A file the user picked, as reported by the file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file to upload")]
    NoFile,

    #[error("File size exceeds 16MB limit")]
    TooLarge,

    #[error("Invalid file type. Please upload a PDF or DOCX file")]
    InvalidType,
}

/// Checks a selection before anything goes over the network.
///
/// Rules run in order and the first failure wins:
/// 1. nothing selected
/// 2. size above [`MAX_FILE_SIZE`]
/// 3. media type outside PDF / DOCX / DOC
pub fn validate(file: Option<&SelectedFile>) -> Result<(), ValidationError> {
    let file = file.ok_or(ValidationError::NoFile)?;

    if file.size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge);
    }

    if !ALLOWED_MEDIA_TYPES.contains(&file.media_type.as_str()) {
        return Err(ValidationError::InvalidType);
    }

    Ok(())
}
