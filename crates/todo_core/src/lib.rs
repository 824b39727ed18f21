//! Core domain logic for the todo service.
//! This crate owns the todo record, its storage and its use-cases.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::todo::{Todo, TodoId, DEFAULT_CATEGORY};
pub use repo::todo_repo::{
    InMemoryTodoRepository, RepoError, RepoResult, TodoListQuery, TodoRepository,
};
pub use service::todo_service::{ServiceResult, TodoService, TodoServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
