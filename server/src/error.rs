//! Request-level failures and their HTTP rendering.
//!
//! Every failure is terminal for the request that caused it: the handler
//! returns the error, and `IntoResponse` turns it into a status code plus an
//! `ErrorBody` carrying the human-readable message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Create was called without a `title` key in its payload.
    #[error("Title is required")]
    MissingTitle,

    /// No todo carries the requested id.
    #[error("Todo not found")]
    NotFound,
}

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::MissingTitle => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), "request rejected: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
