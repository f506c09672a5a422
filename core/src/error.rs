//! Errors surfaced by `TodoClient`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: no todo has the requested id.
    #[error("todo not found")]
    NotFound,

    /// 400: the server rejected the payload. Carries the server's message.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
