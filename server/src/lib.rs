//! In-memory todo service over JSON and HTTP.
//!
//! # Overview
//! Five routes map onto `TodoStore` operations:
//!
//! | Route                 | Success                           | Failure |
//! |-----------------------|-----------------------------------|---------|
//! | `GET /todos`          | 200, all todos                    |         |
//! | `GET /todos/{id}`     | 200, the todo                     | 404     |
//! | `POST /todos`         | 201, the created todo             | 400     |
//! | `PUT /todos/{id}`     | 200, the updated todo             | 404     |
//! | `DELETE /todos/{id}`  | 200, `{"message":"Todo deleted"}` | 404     |
//!
//! # Design
//! - The store is built once and injected as router state (`router`), so
//!   nothing lives in globals and tests get a fresh store per `app()`.
//! - Requests are served concurrently, so the store sits behind a
//!   `RwLock`; each mutation holds the write lock for its whole duration.
//! - Bodies are decoded leniently: an absent or unparseable body counts as
//!   a payload with every field absent.

pub mod config;
pub mod error;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::{ErrorBody, TodoError};
pub use store::{CreateTodo, Todo, TodoStore, UpdateTodo};

pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Confirmation body returned by `DELETE /todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(SharedStore::default())
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `store` on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn serve_until<F>(
    listener: TcpListener,
    store: SharedStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Decode a JSON payload, treating an absent or malformed body as one with
/// every field absent.
fn payload<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|err| {
        tracing::debug!(%err, "ignoring unparseable request body");
        T::default()
    })
}

/// An id segment that is not an unsigned integer cannot name a todo.
fn todo_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, TodoError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(%rejection, "unusable todo id");
        TodoError::NotFound
    })
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let store = store.read().await;
    tracing::debug!(count = store.len(), "listing todos");
    Json(store.list().to_vec())
}

async fn get_todo(
    State(store): State<SharedStore>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Todo>, TodoError> {
    let id = todo_id(path)?;
    let store = store.read().await;
    store.get(id).cloned().map(Json)
}

async fn create_todo(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let todo = store.write().await.create(payload(&body))?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(store): State<SharedStore>,
    path: Result<Path<u64>, PathRejection>,
    body: Bytes,
) -> Result<Json<Todo>, TodoError> {
    let id = todo_id(path)?;
    let todo = store.write().await.update(id, payload(&body))?;
    tracing::info!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Message>, TodoError> {
    let id = todo_id(path)?;
    store.write().await.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(Json(Message {
        message: "Todo deleted".to_string(),
    }))
}
