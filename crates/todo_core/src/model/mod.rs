//! Domain model for todo items.
//!
//! # Responsibility
//! - Define the canonical todo record served by the HTTP layer.
//! - Keep timestamp bookkeeping next to the fields it guards.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod todo;
