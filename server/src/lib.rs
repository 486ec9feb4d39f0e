//! HTTP adapter for the to-do service.
//!
//! # Design
//! Thin controller layer: each handler resolves the authenticated user,
//! makes one service call, and maps the result onto a status code. Identity
//! arrives in the `x-user-id` header — authentication itself belongs to an
//! upstream layer; this adapter only requires its output and passes a `User`
//! value explicitly into every service call. Requests without an identity
//! header are rejected with 401.
//!
//! Failure mapping follows the service's own collapse: a mark-done against a
//! missing item and against someone else's item both come back 400, so the
//! response does not reveal whether the item exists.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use todo_service::{MemoryStore, NewTodoItem, TodoItem, TodoItemService, User};
use tokio::net::TcpListener;
use uuid::Uuid;

const USER_ID_HEADER: &str = "x-user-id";
const USER_NAME_HEADER: &str = "x-user-name";

type Service = Arc<TodoItemService<MemoryStore>>;

pub fn app() -> Router {
    let service: Service = Arc::new(TodoItemService::new(MemoryStore::new()));
    Router::new()
        .route("/todos", get(list_incomplete).post(add_item))
        .route("/todos/{id}/done", post(mark_done))
        .with_state(service)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Resolve the caller from identity headers. `x-user-id` is required and
/// must be non-empty; the display name is optional.
fn current_user(headers: &HeaderMap) -> Result<User, StatusCode> {
    let id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty())
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let username = headers
        .get(USER_NAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    Ok(User {
        id: id.to_string(),
        username: username.to_string(),
    })
}

async fn list_incomplete(
    State(service): State<Service>,
    headers: HeaderMap,
) -> Result<Json<Vec<TodoItem>>, StatusCode> {
    let user = current_user(&headers)?;
    match service.get_incomplete_items(&user).await {
        Ok(items) => Ok(Json(items)),
        Err(err) => {
            tracing::error!(error = %err, user_id = %user.id, "listing items failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn add_item(
    State(service): State<Service>,
    headers: HeaderMap,
    Json(input): Json<NewTodoItem>,
) -> Result<StatusCode, StatusCode> {
    let user = current_user(&headers)?;
    if service.add_item(input, &user).await {
        Ok(StatusCode::CREATED)
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

async fn mark_done(
    State(service): State<Service>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let user = current_user(&headers)?;
    if service.mark_done(id, &user).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}
