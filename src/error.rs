use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Backend,
}

/// Error returned by every handler. `message` is the route-specific text shown
/// to clients; `details` carries the underlying driver or decoder message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl ApiError {
    fn new<S: ToString>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.to_string(),
            details: None,
        }
    }

    pub fn validation<S: ToString>(message: S) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn not_found<S: ToString>(message: S) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn backend<S: ToString>(message: S) -> Self {
        Self::new(ErrorKind::Backend, message)
    }

    pub fn with_details<D: fmt::Display>(mut self, details: D) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Backend => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: &self.message,
            details: self.details.as_deref(),
        })
    }
}

impl From<BlockingError<ApiError>> for ApiError {
    fn from(err: BlockingError<ApiError>) -> Self {
        match err {
            BlockingError::Error(err) => err,
            BlockingError::Canceled => ApiError::backend("Request canceled"),
        }
    }
}

/// Needed by `Connection::transaction`; handlers attach their own message with `or_backend`.
impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::backend("Database error").with_details(err)
    }
}

/// Turns driver errors into backend errors carrying a route message,
/// the way `anyhow::Context` attaches context.
pub trait OrBackend<T> {
    fn or_backend(self, message: &str) -> ApiResult<T>;
}

impl<T, E: fmt::Display> OrBackend<T> for Result<T, E> {
    fn or_backend(self, message: &str) -> ApiResult<T> {
        self.map_err(|err| ApiError::backend(message).with_details(err))
    }
}
