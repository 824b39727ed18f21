//! HTTP boundary for the todo service.
//! Wires `todo_core` use-cases to an axum router and process configuration.

pub mod api;
pub mod config;

pub use api::{app, app_with_assets, ApiError, AppState};
pub use config::ServerConfig;
