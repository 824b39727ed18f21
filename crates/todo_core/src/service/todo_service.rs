//! Todo use-case service.
//!
//! # Responsibility
//! - Provide create/update/complete/delete and query entry points.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - `update_item` overwrites title, description, completed and due date
//!   unconditionally; callers merge unset fields beforehand.
//! - Category changes go through `set_category`, never `update_item`.
//! - `add_item` rejects an empty title even though the HTTP layer checks it
//!   first.

use crate::model::todo::{Todo, TodoId, DEFAULT_CATEGORY};
use crate::repo::todo_repo::{RepoError, TodoListQuery, TodoRepository};
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, TodoServiceError>;

/// Service error for todo use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoServiceError {
    /// Target todo does not exist.
    NotFound(TodoId),
    /// Missing required field or otherwise unusable input.
    InvalidInput(String),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TodoServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for todo operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and stores a new todo.
    ///
    /// # Contract
    /// - `completed` starts `false`; `created_at == updated_at`.
    /// - `category = None` falls back to [`DEFAULT_CATEGORY`].
    ///
    /// # Errors
    /// - `InvalidInput` when `title` is empty.
    pub fn add_item(
        &self,
        title: &str,
        description: &str,
        due_date: Option<NaiveDate>,
        category: Option<&str>,
    ) -> ServiceResult<Todo> {
        if title.is_empty() {
            warn!("event=todo_create module=service status=error error_code=empty_title");
            return Err(TodoServiceError::InvalidInput(
                "title must not be empty".to_string(),
            ));
        }

        let mut todo = Todo::new(title, description);
        todo.due_date = due_date;
        todo.category = category.unwrap_or(DEFAULT_CATEGORY).to_string();
        self.repo.create_todo(&todo)?;

        info!(
            "event=todo_create module=service status=ok id={} category={}",
            todo.id, todo.category
        );
        debug!("event=todo_create module=service todo={todo}");
        Ok(todo)
    }

    /// Overwrites title, description, completion and due date of a todo.
    ///
    /// # Errors
    /// - `NotFound` when no todo has `id`.
    pub fn update_item(
        &self,
        id: TodoId,
        title: &str,
        description: &str,
        completed: bool,
        due_date: Option<NaiveDate>,
    ) -> ServiceResult<Todo> {
        self.modify(id, "todo_update", |todo| {
            todo.set_title(title);
            todo.set_description(description);
            todo.set_completed(completed);
            todo.set_due_date(due_date);
        })
    }

    /// Replaces the category of a todo.
    pub fn set_category(&self, id: TodoId, category: &str) -> ServiceResult<Todo> {
        self.modify(id, "todo_set_category", |todo| todo.set_category(category))
    }

    /// Marks a todo as completed.
    pub fn complete_item(&self, id: TodoId) -> ServiceResult<Todo> {
        self.modify(id, "todo_complete", |todo| todo.set_completed(true))
    }

    /// Removes a todo; returns whether anything was removed.
    pub fn delete_item(&self, id: TodoId) -> ServiceResult<bool> {
        let deleted = self.repo.delete_todo(id)?;
        info!("event=todo_delete module=service status=ok id={id} deleted={deleted}");
        Ok(deleted)
    }

    pub fn get_item(&self, id: TodoId) -> ServiceResult<Option<Todo>> {
        Ok(self.repo.get_todo(id)?)
    }

    pub fn list_all(&self) -> ServiceResult<Vec<Todo>> {
        self.list(&TodoListQuery::default())
    }

    pub fn list_completed(&self) -> ServiceResult<Vec<Todo>> {
        self.list(&TodoListQuery {
            completed: Some(true),
            ..TodoListQuery::default()
        })
    }

    pub fn list_incomplete(&self) -> ServiceResult<Vec<Todo>> {
        self.list(&TodoListQuery {
            completed: Some(false),
            ..TodoListQuery::default()
        })
    }

    /// Lists todos whose category equals `category` exactly.
    pub fn list_by_category(&self, category: &str) -> ServiceResult<Vec<Todo>> {
        self.list(&TodoListQuery {
            category: Some(category.to_string()),
            ..TodoListQuery::default()
        })
    }

    /// Lists distinct categories in first-seen scan order.
    pub fn list_categories(&self) -> ServiceResult<Vec<String>> {
        let mut categories: Vec<String> = Vec::new();
        for todo in self.list_all()? {
            if !categories.contains(&todo.category) {
                categories.push(todo.category);
            }
        }
        Ok(categories)
    }

    fn list(&self, query: &TodoListQuery) -> ServiceResult<Vec<Todo>> {
        Ok(self.repo.list_todos(query)?)
    }

    /// Loads a todo, applies `apply`, and writes it back.
    ///
    /// Read and write are separate repository calls; concurrent writers to the
    /// same todo resolve as last-write-wins.
    fn modify(
        &self,
        id: TodoId,
        event: &str,
        apply: impl FnOnce(&mut Todo),
    ) -> ServiceResult<Todo> {
        let Some(mut todo) = self.repo.get_todo(id)? else {
            warn!("event={event} module=service status=error error_code=not_found id={id}");
            return Err(TodoServiceError::NotFound(id));
        };

        apply(&mut todo);
        self.repo.update_todo(&todo)?;

        info!("event={event} module=service status=ok id={id}");
        debug!("event={event} module=service todo={todo}");
        Ok(todo)
    }
}
