use crate::error::ApiError;
use shared::document::{sample_document, ResultsDocument};
use tracing::warn;
use uuid::Uuid;

pub fn parse_session_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::InvalidSessionId)
}

/// Reads the configured results document, falling back to the bundled
/// sample when no path is set or the file cannot be used.
pub fn load_results(path: Option<&str>) -> Result<ResultsDocument, ApiError> {
    if let Some(path) = path {
        match ResultsDocument::load(path) {
            Ok(doc) => return Ok(doc),
            Err(e) => warn!("Could not load results from {}: {} - using sample document", path, e),
        }
    }
    sample_document().map_err(|e| ApiError::Internal(e.to_string()))
}
