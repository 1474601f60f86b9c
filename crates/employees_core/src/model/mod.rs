//! Domain model for the employee directory.
//!
//! # Responsibility
//! - Define canonical data structures used by service and transport layers.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `EmployeeId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod employee;
