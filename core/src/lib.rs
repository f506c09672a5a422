//! Sans-IO client for the todo service.
//!
//! # Overview
//! `TodoClient` turns each API operation into a `build_*` call that yields
//! an `HttpRequest` and a `parse_*` call that consumes the matching
//! `HttpResponse`. Executing the request is the caller's job, which keeps
//! this crate free of any HTTP stack or async runtime.
//!
//! # Design
//! - The client holds only its base URL.
//! - Status interpretation lives in one place: 404 is `ApiError::NotFound`,
//!   400 is `ApiError::BadRequest` with the server's message, anything else
//!   unexpected is `ApiError::HttpError`.
//! - DTOs do not depend on the server crate; the integration test catches
//!   schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, ErrorBody, Message, Todo, UpdateTodo};
