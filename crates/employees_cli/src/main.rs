//! Server entry point.
//!
//! # Responsibility
//! - Wire configuration, logging, storage and the HTTP router together.
//! - Serve until Ctrl-C, then drain in-flight requests.

mod config;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use config::ServerConfig;
use employees_core::db::{open_db, open_db_in_memory};
use employees_core::{EmployeeService, SqliteEmployeeRepository};
use log::{info, warn};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config)?;

    let conn = if config.in_memory {
        open_db_in_memory().context("failed to open in-memory database")?
    } else {
        open_db(&config.database)
            .with_context(|| format!("failed to open database `{}`", config.database.display()))?
    };
    let repo = SqliteEmployeeRepository::try_new(conn).context("failed to initialize repository")?;
    let service = Arc::new(EmployeeService::new(repo));
    let app = employees_web::router(service);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        "event=server_start module=cli status=ok bind={} in_memory={} version={}",
        config.bind,
        config.in_memory,
        employees_core::core_version()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated abnormally")?;

    info!("event=server_stop module=cli status=ok");
    Ok(())
}

fn init_logging(config: &ServerConfig) -> Result<()> {
    let level = config.effective_log_level();
    match config.log_dir.as_deref() {
        Some(dir) => employees_core::init_logging(level, dir),
        None => employees_core::init_stderr_logging(level),
    }
    .map_err(|err| anyhow!(err))
}

async fn shutdown_signal() {
    wait_for_shutdown(tokio::signal::ctrl_c()).await;
}

/// Resolves once `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running until the process is killed.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("event=server_stop module=cli status=start reason=ctrl_c"),
        Err(err) => {
            warn!("event=signal_install module=cli status=error error={err}");
            std::future::pending::<()>().await;
        }
    }
}
