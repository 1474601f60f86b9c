//! Shared router state.
//!
//! # Invariants
//! - Service calls never run on an async worker; they are moved to tokio's
//!   blocking pool because rusqlite I/O is synchronous.

use crate::error::WebError;
use employees_core::{EmployeeRepository, EmployeeService, RepoResult};
use std::sync::Arc;

/// Handle to the employee service, cloned into every request.
pub struct AppState<R: EmployeeRepository> {
    service: Arc<EmployeeService<R>>,
}

impl<R: EmployeeRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<R: EmployeeRepository + 'static> AppState<R> {
    pub fn new(service: Arc<EmployeeService<R>>) -> Self {
        Self { service }
    }

    /// Runs one blocking service call and hands back its result.
    pub async fn call<T, F>(&self, op: F) -> Result<T, WebError>
    where
        F: FnOnce(&EmployeeService<R>) -> RepoResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let value = tokio::task::spawn_blocking(move || op(&service)).await??;
        Ok(value)
    }
}
