use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use shared::{error::{Error as SharedError, ErrorCode, ErrorResponse}, tally::TallyError};
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum ApiError {
    #[error("Session not found")]
    SessionNotFound,
    #[error("Invalid session ID")]
    InvalidSessionId,
    #[error("{0}")]
    Rejected(SharedError),
    #[error("Results document unavailable")]
    DocumentUnavailable,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::SessionNotFound => Status::NotFound,
            ApiError::InvalidSessionId => Status::BadRequest,
            ApiError::Rejected(_) => Status::BadRequest,
            ApiError::DocumentUnavailable => Status::ServiceUnavailable,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::SessionNotFound => ErrorCode::SessionNotFound,
            ApiError::InvalidSessionId => ErrorCode::InvalidInput,
            ApiError::Rejected(err) => err.code.clone(),
            ApiError::DocumentUnavailable => ErrorCode::DocumentUnavailable,
            ApiError::Internal(_) => ErrorCode::SystemError,
        }
    }
}

impl From<TallyError> for ApiError {
    fn from(err: TallyError) -> Self {
        ApiError::Rejected(SharedError::from(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        let status = self.status();
        let body = Json(ErrorResponse { error: self.to_string() });

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .header(ContentType::JSON)
            .ok()
    }
}
