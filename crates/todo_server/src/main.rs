//! Todo REST service entry point.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use todo_core::{init_logging, logging_status, InMemoryTodoRepository, TodoService};
use todo_server::{app, app_with_assets, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level, config.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let state = AppState::new(TodoService::new(InMemoryTodoRepository::new()));
    let router = match config.static_dir.as_deref() {
        Some(dir) => app_with_assets(state, dir),
        None => app(state),
    };
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    let (log_level, log_target) =
        logging_status().context("logging must be active after init_logging")?;
    info!(
        "event=server_start module=server status=ok bind={} version={} log_level={} log_target={} static_dir={}",
        config.bind,
        todo_core::core_version(),
        log_level,
        log_target,
        config
            .static_dir
            .as_deref()
            .map_or_else(|| "none".to_string(), |dir| dir.display().to_string())
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=signal_listen module=server status=error error={err}");
        std::future::pending::<()>().await;
    }
    info!("event=shutdown_requested module=server status=ok");
}
