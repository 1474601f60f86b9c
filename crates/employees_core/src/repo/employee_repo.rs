//! Employee repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five storage operations the service consumes.
//! - Keep SQL and row mapping inside the persistence boundary.
//!
//! # Invariants
//! - `save` on a transient record assigns a fresh id; on a persisted record it
//!   overwrites the row with the same id.
//! - `delete_by_id` on an absent id is a no-op.
//! - `find_all` is ordered by ascending id.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

const EMPLOYEE_SELECT_SQL: &str = "SELECT id, name, age FROM employees";
const EMPLOYEES_TABLE: &str = "employees";
const REQUIRED_COLUMNS: &[&str] = &["id", "name", "age"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// A previous holder of the connection panicked mid-operation.
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted employee data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::LockPoisoned => write!(f, "employee store lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage capability consumed by `EmployeeService`.
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    fn find_all(&self) -> RepoResult<Vec<Employee>>;
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    fn save(&self, employee: &Employee) -> RepoResult<Employee>;
    fn exists_by_id(&self, id: EmployeeId) -> RepoResult<bool>;
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
///
/// Owns one connection; each call holds the lock for a single statement.
pub struct SqliteEmployeeRepository {
    conn: Mutex<Connection>,
}

impl SqliteEmployeeRepository {
    /// Wraps a connection after verifying it was bootstrapped by `db::open_db`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `user_version` differs from the latest
    ///   migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema was
    ///   tampered with.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let conn = self.lock()?;
        let id = match employee.id {
            None => {
                conn.execute(
                    "INSERT INTO employees (name, age) VALUES (?1, ?2);",
                    params![employee.name.as_str(), employee.age],
                )?;
                conn.last_insert_rowid()
            }
            Some(id) => {
                conn.execute(
                    "INSERT INTO employees (id, name, age) VALUES (?1, ?2, ?3)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        age = excluded.age;",
                    params![id, employee.name.as_str(), employee.age],
                )?;
                id
            }
        };
        debug!("event=employee_save module=repo status=ok id={id}");

        Ok(Employee {
            id: Some(id),
            name: employee.name.clone(),
            age: employee.age,
        })
    }

    fn exists_by_id(&self, id: EmployeeId) -> RepoResult<bool> {
        let conn = self.lock()?;
        let exists = conn
            .query_row("SELECT 1 FROM employees WHERE id = ?1;", [id], |_| Ok(()))
            .optional()?
            .is_some();
        Ok(exists)
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        debug!("event=employee_delete module=repo status=ok id={id} removed={removed}");
        Ok(())
    }
}

fn ensure_schema(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [EMPLOYEES_TABLE],
            |_| Ok(()),
        )
        .optional()?
        .is_some();
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(EMPLOYEES_TABLE));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({EMPLOYEES_TABLE});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<Vec<_>, _>>()?;
    for &column in REQUIRED_COLUMNS {
        if !columns.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: EMPLOYEES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;
    let age: i64 = row.get("age")?;
    let age = i32::try_from(age).map_err(|_| {
        RepoError::InvalidData(format!("age `{age}` out of range in employees.age (id={id})"))
    })?;

    Ok(Employee {
        id: Some(id),
        name: row.get("name")?,
        age,
    })
}
