use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

use crate::tally::TallyError;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid item reference")]
    InvalidReference,
    #[error("Invalid vote direction")]
    InvalidDirection,
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Session not found")]
    SessionNotFound,
    #[error("Document unavailable")]
    DocumentUnavailable,
    #[error("Internal system error")]
    SystemError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl From<TallyError> for Error {
    fn from(err: TallyError) -> Self {
        match err {
            TallyError::InvalidReference(details) =>
                Error::with_details(ErrorCode::InvalidReference, "Vote rejected", details),
            TallyError::InvalidDirection(details) =>
                Error::with_details(ErrorCode::InvalidDirection, "Vote rejected", details),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
