//! HTTP adapters for the employee directory.
//!
//! # Responsibility
//! - Expose the service through two independent surfaces: server-rendered
//!   pages (`/employees`) and a JSON API (`/api/employees`).
//! - Translate absence and storage failures into HTTP statuses.
//!
//! # Invariants
//! - Both surfaces share one `EmployeeService`; neither calls the other.

pub mod error;
pub mod html;
pub mod middleware;
pub mod rest;
pub mod state;
pub mod views;

use axum::routing::get;
use axum::{Json, Router};
use employees_core::{core_version, ping, EmployeeRepository, EmployeeService};
use serde_json::{json, Value};
use std::sync::Arc;

pub use error::{PageError, WebError};
pub use state::AppState;

/// Builds the full application router over one shared service.
pub fn router<R: EmployeeRepository + 'static>(service: Arc<EmployeeService<R>>) -> Router {
    Router::new()
        .merge(html::routes::<R>())
        .merge(rest::routes::<R>())
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(AppState::new(service))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ping": ping(),
        "version": core_version(),
    }))
}
