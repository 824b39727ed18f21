//! Server configuration.
//!
//! # Responsibility
//! - Parse command-line flags with environment variable fallbacks.
//!
//! # Invariants
//! - Every setting has a usable default except `log_dir` and `static_dir`.
//!   Without `log_dir` logs go to stderr; without `static_dir` only the API
//!   is served.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use todo_core::default_log_level;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo REST service", version)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TODO_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,
    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = default_log_level())]
    pub log_level: String,
    /// Absolute directory for rotating log files; stderr when unset.
    #[arg(long, env = "TODO_LOG_DIR")]
    pub log_dir: Option<String>,
    /// Directory of browser client assets served for non-API paths.
    #[arg(long, env = "TODO_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}
