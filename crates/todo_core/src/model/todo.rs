//! Todo domain model.
//!
//! # Responsibility
//! - Define the todo record and its wire shape.
//! - Provide mutation helpers that keep `updated_at` current.
//!
//! # Invariants
//! - `id` and `created_at` never change after construction.
//! - `updated_at >= created_at` at all times.
//! - `category` is never empty-by-omission; it defaults to `general`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a todo item.
pub type TodoId = Uuid;

/// Category assigned when the caller does not supply one.
pub const DEFAULT_CATEGORY: &str = "general";

/// A single todo record.
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`, `dueDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Calendar date only, serialized as `YYYY-MM-DD` or `null`.
    pub due_date: Option<NaiveDate>,
    pub category: String,
}

impl Todo {
    /// Creates an incomplete todo with a generated ID and default category.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, description)
    }

    /// Creates an incomplete todo with a caller-provided ID.
    ///
    /// # Invariants
    /// - `created_at` and `updated_at` start out equal.
    /// - `due_date` is `None` and `category` is [`DEFAULT_CATEGORY`].
    pub fn with_id(id: TodoId, title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
            due_date: None,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.touch();
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
        self.touch();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.touch();
    }

    /// Refreshes `updated_at`, clamped so it never precedes `created_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(
            f,
            "[{mark}] [{}] {} - {}",
            self.category, self.title, self.description
        )?;
        if let Some(due_date) = self.due_date {
            write!(f, " (due: {due_date})")?;
        }
        Ok(())
    }
}
