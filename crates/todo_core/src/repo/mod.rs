//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for todos.
//! - Isolate map/locking details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage failures.
//! - Storage is process-local; nothing survives a restart.

pub mod todo_repo;
