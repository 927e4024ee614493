pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];
pub const MAX_URL_LENGTH: usize = 2048;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File {0} exceeds the maximum size of 10MB")]
    FileTooLarge(String),
    #[error("Unsupported file type: {0} (supported: PDF, DOCX, TXT)")]
    UnsupportedFileType(String),
    #[error("Empty file: {0}")]
    EmptyFile(String),
    #[error("Link exceeds maximum length of {MAX_URL_LENGTH}")]
    UrlTooLong,
    #[error("Link must start with http:// or https://")]
    InvalidUrl,
}

pub fn validate_upload(name: &str, size: u64) -> Result<(), ValidationError> {
    let extension = name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedFileType(name.to_string()));
    }
    if size == 0 { return Err(ValidationError::EmptyFile(name.to_string())); }
    if size > MAX_UPLOAD_BYTES { return Err(ValidationError::FileTooLarge(name.to_string())); }

    Ok(())
}

/// A blank link is allowed (the user may upload files instead).
pub fn validate_project_link(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();
    if url.is_empty() { return Ok(()); }
    if url.len() > MAX_URL_LENGTH { return Err(ValidationError::UrlTooLong); }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ValidationError::InvalidUrl);
    }
    Ok(())
}
