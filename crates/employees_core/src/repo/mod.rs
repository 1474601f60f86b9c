//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage contract consumed by the service.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories return `Option`/`bool` for absence; errors are reserved for
//!   storage and data-integrity failures.

pub mod employee_repo;
pub mod memory_repo;
