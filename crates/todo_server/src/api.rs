//! HTTP API for todo items.
//!
//! # Responsibility
//! - Map `/api/todos` routes onto `TodoService` use-cases.
//! - Perform request validation: required title, `YYYY-MM-DD` due dates.
//! - Translate service outcomes into status codes.
//! - Optionally serve a browser client from a static asset directory.
//!
//! # Invariants
//! - Error responses carry a status code and an empty body.
//! - Ids that are not UUIDs are reported as not found.
//! - PUT merges unset fields with the stored todo before overwriting it.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::NaiveDate;
use log::{error, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path as FsPath;
use std::sync::Arc;
use todo_core::{InMemoryTodoRepository, Todo, TodoId, TodoService, TodoServiceError};
use tower_http::services::ServeDir;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Shared handler dependencies.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoService<InMemoryTodoRepository>>,
}

impl AppState {
    pub fn new(todos: TodoService<InMemoryTodoRepository>) -> Self {
        Self {
            todos: Arc::new(todos),
        }
    }
}

/// Failure outcome of a handler.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidInput(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::NotFound(message) | Self::InvalidInput(message) => {
                warn!("event=http_response module=api status=error code={status} error={message}");
            }
            Self::Internal(message) => {
                error!("event=http_response module=api status=error code={status} error={message}");
            }
        }
        status.into_response()
    }
}

impl From<TodoServiceError> for ApiError {
    fn from(value: TodoServiceError) -> Self {
        match value {
            TodoServiceError::NotFound(id) => Self::NotFound(format!("todo not found: {id}")),
            TodoServiceError::InvalidInput(message) => Self::InvalidInput(message),
            TodoServiceError::Repo(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidInput(value.body_text())
    }
}

/// Body of `POST /api/todos`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub category: Option<String>,
}

/// Body of `PUT /api/todos/{id}`.
///
/// `None` (absent or `null`) keeps the stored value, except for `due_date`,
/// where only an absent key keeps it and `null` clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<Option<String>>,
    pub category: Option<String>,
}

/// Wraps a present value (including `null`) in `Some`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Builds the service router around `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/incomplete", get(list_incomplete))
        .route("/api/todos/completed", get(list_completed))
        .route("/api/todos/categories", get(list_categories))
        .route("/api/todos/category/:category", get(list_by_category))
        .route(
            "/api/todos/:id",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/todos/:id/complete", patch(complete_todo))
        .with_state(state)
}

/// Builds the router and serves files under `assets_dir` for every path no
/// API route matches; `/` resolves to `index.html`.
pub fn app_with_assets(state: AppState, assets_dir: &FsPath) -> Router {
    app(state).fallback_service(ServeDir::new(assets_dir))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: todo_core::core_version(),
    })
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.list_all()?))
}

async fn list_incomplete(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.list_incomplete()?))
}

async fn list_completed(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.list_completed()?))
}

async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(state.todos.list_by_category(&category)?))
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.todos.list_categories()?))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    state
        .todos
        .get_item(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("todo not found: {id}")))
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(request) = payload?;

    let title = request.title.as_deref().unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::InvalidInput("title is required".to_string()));
    }
    let due_date = match request.due_date.as_deref() {
        Some(value) if !value.is_empty() => Some(parse_due_date(value)?),
        _ => None,
    };

    let todo = state.todos.add_item(
        title,
        request.description.as_deref().unwrap_or_default(),
        due_date,
        request.category.as_deref(),
    )?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Json(request) = payload?;
    let id = parse_id(&id)?;
    let existing = state
        .todos
        .get_item(id)?
        .ok_or_else(|| ApiError::NotFound(format!("todo not found: {id}")))?;

    let title = request.title.unwrap_or(existing.title);
    let description = request.description.unwrap_or(existing.description);
    let completed = request.completed.unwrap_or(existing.completed);
    let category = request.category.unwrap_or(existing.category);
    let due_date = match request.due_date {
        None => existing.due_date,
        Some(None) => None,
        Some(Some(value)) if value.is_empty() => None,
        Some(Some(value)) => Some(parse_due_date(&value)?),
    };

    state
        .todos
        .update_item(id, &title, &description, completed, due_date)?;
    let updated = state.todos.set_category(id, &category)?;
    Ok(Json(updated))
}

async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.todos.complete_item(id)?))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if state.todos.delete_item(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("todo not found: {id}")))
    }
}

/// Any id that is not a UUID cannot name a stored todo.
fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    TodoId::parse_str(raw).map_err(|_| ApiError::NotFound(format!("todo not found: {raw}")))
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded fields, leading whitespace and signed years for
/// `%Y-%m-%d`; those are rejected by requiring the canonical rendering to
/// equal the input.
fn parse_due_date(raw: &str) -> Result<NaiveDate, ApiError> {
    let date = NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT)
        .map_err(|err| ApiError::InvalidInput(format!("invalid dueDate `{raw}`: {err}")))?;
    if date.format(DUE_DATE_FORMAT).to_string() != raw {
        return Err(ApiError::InvalidInput(format!(
            "invalid dueDate `{raw}`: expected YYYY-MM-DD"
        )));
    }
    Ok(date)
}
