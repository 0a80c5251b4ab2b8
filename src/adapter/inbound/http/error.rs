//! Error responses.
//!
//! Client errors carry the error message. Server errors are answered with a
//! generic message. Services log the failures they return; this layer only
//! logs requests it rejects itself, before any service is called.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use super::render;
use crate::error::Error;

/// Error returned by `/api` handlers; rendered as JSON.
#[derive(Debug)]
pub struct ApiError(Failure);

/// Error returned by page handlers; rendered as an HTML fragment.
#[derive(Debug)]
pub struct PageError(Failure);

#[derive(Debug)]
enum Failure {
    App(Error),
    /// The request could not be extracted (bad content type, malformed body
    /// or query string).
    Rejected { status: StatusCode, message: String },
}

impl Failure {
    fn status(&self) -> StatusCode {
        match self {
            Failure::App(err) => status_of(err),
            Failure::Rejected { status, .. } => *status,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Failure::App(err) => err.code(),
            Failure::Rejected { .. } => "invalid_input",
        }
    }

    /// Log failures raised in this layer and pick the message shown to the
    /// client.
    fn public_message(&self) -> String {
        match self {
            Failure::App(err) => public_message(err, status_of(err)),
            Failure::Rejected { status, message } => {
                warn!(status = status.as_u16(), error = %message, "Request rejected");
                message.clone()
            }
        }
    }
}

impl ApiError {
    /// A request the extractor refused.
    #[must_use]
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self(Failure::Rejected {
            status,
            message: message.into(),
        })
    }
}

impl PageError {
    /// A request the extractor refused.
    #[must_use]
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self(Failure::Rejected {
            status,
            message: message.into(),
        })
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'a str,
}

impl<E: Into<Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(Failure::App(err.into()))
    }
}

impl<E: Into<Error>> From<E> for PageError {
    fn from(err: E) -> Self {
        Self(Failure::App(err.into()))
    }
}

/// HTTP status for an error.
#[must_use]
pub fn status_of(err: &Error) -> StatusCode {
    match err {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::ConstraintViolation(_) => StatusCode::CONFLICT,
        Error::Cancelled => StatusCode::REQUEST_TIMEOUT,
        Error::Config(_)
        | Error::RankRecompute(_)
        | Error::Connection(_)
        | Error::Database(_)
        | Error::Task(_)
        | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Pick the message shown to the client.
///
/// Invalid input is caught by handlers before any service runs, so it is
/// logged here. Everything else was already logged by the service.
fn public_message(err: &Error, status: StatusCode) -> String {
    if let Error::InvalidInput(e) = err {
        warn!(error = %e, code = err.code(), "Request rejected");
    }
    if status.is_server_error() {
        "internal server error".to_string()
    } else {
        err.to_string()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let body = ErrorBody {
            error: self.0.public_message(),
            code: self.0.code(),
        };
        (status, Json(body)).into_response()
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.public_message();
        (status, Html(render::error_fragment(&message))).into_response()
    }
}
