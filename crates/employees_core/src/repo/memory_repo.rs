//! In-process employee repository.
//!
//! Mirrors `SqliteEmployeeRepository` semantics (ascending-id listing,
//! monotonic id assignment, upsert on explicit id) without a database.

use super::employee_repo::{EmployeeRepository, RepoError, RepoResult};
use crate::model::employee::{Employee, EmployeeId};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<EmployeeId, Employee>,
    last_id: EmployeeId,
}

/// Map-backed repository for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    store: Mutex<Store>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Store>> {
        self.store.lock().map_err(|_| RepoError::LockPoisoned)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let mut store = self.lock()?;
        // Ids never go backwards, even after explicit-id upserts; same as AUTOINCREMENT.
        let id = match employee.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => {
                store.last_id = store.last_id.checked_add(1).ok_or_else(|| {
                    RepoError::InvalidData("employee id space exhausted".to_string())
                })?;
                store.last_id
            }
        };

        let persisted = Employee {
            id: Some(id),
            ..employee.clone()
        };
        store.rows.insert(id, persisted.clone());
        Ok(persisted)
    }

    fn exists_by_id(&self, id: EmployeeId) -> RepoResult<bool> {
        Ok(self.lock()?.rows.contains_key(&id))
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryEmployeeRepository;
    use crate::model::employee::Employee;
    use crate::repo::employee_repo::{EmployeeRepository, RepoError};

    #[test]
    fn ids_are_not_reused_after_delete() {
        let repo = InMemoryEmployeeRepository::new();
        let first = repo.save(&Employee::new("a", 1)).unwrap();
        repo.delete_by_id(first.id.unwrap()).unwrap();

        let second = repo.save(&Employee::new("b", 2)).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn explicit_id_save_overwrites_in_place() {
        let repo = InMemoryEmployeeRepository::new();
        let created = repo.save(&Employee::new("before", 10)).unwrap();
        let id = created.id.unwrap();

        repo.save(&Employee::with_id(id, "after", 11)).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all, vec![Employee::with_id(id, "after", 11)]);
    }

    #[test]
    fn assigning_past_max_id_is_invalid_data() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(&Employee::with_id(i64::MAX, "last", 1)).unwrap();

        let err = repo.save(&Employee::new("overflow", 2)).unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }
}
