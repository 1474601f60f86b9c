//! Employee domain model.
//!
//! # Responsibility
//! - Define the single record type managed by the service.
//! - Distinguish transient records (no id) from persisted ones.
//!
//! # Invariants
//! - `id` is assigned by the store on first save and never reassigned.
//! - Equality covers `(id, name, age)`.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for persisted employees.
pub type EmployeeId = i64;

/// Employee record shared by the HTML and JSON surfaces.
///
/// Missing `name`/`age` fields in inbound payloads fall back to `""`/`0`;
/// no other validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// `None` while transient.
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i32,
}

impl Employee {
    /// Creates a transient employee awaiting its first save.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
        }
    }

    /// Creates an employee with a known identity.
    ///
    /// Used by read paths and tests where the store already assigned an id.
    pub fn with_id(id: EmployeeId, name: impl Into<String>, age: i32) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            age,
        }
    }

    /// Returns whether this record has been assigned a persisted identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
