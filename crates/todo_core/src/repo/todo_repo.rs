//! Todo repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed CRUD and full-scan listing over todo records.
//! - Keep the backing map private to the storage boundary.
//!
//! # Invariants
//! - Keys are unique; the map key always equals `Todo::id`.
//! - Listing order is unspecified.
//! - Each call takes the lock once; no transaction spans multiple calls.

use crate::model::todo::{Todo, TodoId};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for todo storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(TodoId),
    /// A writer panicked while holding the store lock.
    StorePoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::StorePoisoned => write!(f, "todo store lock poisoned"),
        }
    }
}

impl Error for RepoError {}

impl<T> From<PoisonError<T>> for RepoError {
    fn from(_: PoisonError<T>) -> Self {
        Self::StorePoisoned
    }
}

/// Filter options for listing todos.
///
/// `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListQuery {
    pub completed: Option<bool>,
    /// Exact, case-sensitive category match.
    pub category: Option<String>,
}

impl TodoListQuery {
    fn matches(&self, todo: &Todo) -> bool {
        self.completed.map_or(true, |flag| todo.completed == flag)
            && self
                .category
                .as_deref()
                .map_or(true, |category| todo.category == category)
    }
}

/// Repository interface for todo CRUD operations.
pub trait TodoRepository: Send + Sync {
    fn create_todo(&self, todo: &Todo) -> RepoResult<TodoId>;
    fn update_todo(&self, todo: &Todo) -> RepoResult<()>;
    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    fn list_todos(&self, query: &TodoListQuery) -> RepoResult<Vec<Todo>>;
    /// Returns whether a record was removed.
    fn delete_todo(&self, id: TodoId) -> RepoResult<bool>;
}

/// Hash-map backed todo repository living for the process lifetime.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<HashMap<TodoId, Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn create_todo(&self, todo: &Todo) -> RepoResult<TodoId> {
        self.todos.write()?.insert(todo.id, todo.clone());
        Ok(todo.id)
    }

    fn update_todo(&self, todo: &Todo) -> RepoResult<()> {
        let mut todos = self.todos.write()?;
        match todos.get_mut(&todo.id) {
            Some(slot) => {
                *slot = todo.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(todo.id)),
        }
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        Ok(self.todos.read()?.get(&id).cloned())
    }

    fn list_todos(&self, query: &TodoListQuery) -> RepoResult<Vec<Todo>> {
        Ok(self
            .todos
            .read()?
            .values()
            .filter(|todo| query.matches(todo))
            .cloned()
            .collect())
    }

    fn delete_todo(&self, id: TodoId) -> RepoResult<bool> {
        Ok(self.todos.write()?.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTodoRepository, RepoError, TodoListQuery, TodoRepository};
    use crate::model::todo::Todo;

    #[test]
    fn query_filters_combine() {
        let repo = InMemoryTodoRepository::new();
        let mut done_work = Todo::new("done work", "");
        done_work.completed = true;
        done_work.category = "work".to_string();
        let open_work = {
            let mut todo = Todo::new("open work", "");
            todo.category = "work".to_string();
            todo
        };
        let open_home = Todo::new("open home", "");
        for todo in [&done_work, &open_work, &open_home] {
            repo.create_todo(todo).unwrap();
        }

        let query = TodoListQuery {
            completed: Some(false),
            category: Some("work".to_string()),
        };
        let hits = repo.list_todos(&query).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, open_work.id);
        assert_eq!(repo.list_todos(&TodoListQuery::default()).unwrap().len(), 3);
    }

    #[test]
    fn update_missing_returns_not_found() {
        let repo = InMemoryTodoRepository::new();
        let todo = Todo::new("ghost", "");
        assert_eq!(
            repo.update_todo(&todo).unwrap_err(),
            RepoError::NotFound(todo.id)
        );
        assert!(repo.list_todos(&TodoListQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let repo = std::sync::Arc::new(InMemoryTodoRepository::new());
        let poisoner = std::sync::Arc::clone(&repo);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.todos.write().unwrap();
            panic!("poison the store");
        })
        .join();

        let err = repo.get_todo(uuid::Uuid::new_v4()).unwrap_err();
        assert_eq!(err, RepoError::StorePoisoned);
    }
}
