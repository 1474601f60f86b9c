//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points used by both transport surfaces.
//! - Enforce the single business rule: update requires a pre-existing record.
//!
//! # Invariants
//! - Absence is reported as `None`, never as an error.
//! - The service holds no state across calls; every call round-trips to the
//!   repository.
//! - On update, the path id overrides whatever id the payload carries.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};
use log::info;

/// Use-case service wrapper for employee CRUD.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored employee.
    pub fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.repo.find_all()
    }

    /// Gets one employee, or `None` when the id is unknown.
    pub fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.repo.find_by_id(id)
    }

    /// Persists a new employee and returns it with its assigned id.
    ///
    /// An incoming id is dropped so the store always assigns a fresh one.
    pub fn create(&self, employee: &Employee) -> RepoResult<Employee> {
        let transient = Employee {
            id: None,
            ..employee.clone()
        };
        let created = self.repo.save(&transient)?;
        info!(
            "event=employee_create module=service status=ok id={}",
            created.id.unwrap_or_default()
        );
        Ok(created)
    }

    /// Replaces name/age of an existing employee.
    ///
    /// Returns `None` without touching the store when `id` does not exist.
    pub fn update(&self, id: EmployeeId, employee: &Employee) -> RepoResult<Option<Employee>> {
        if !self.repo.exists_by_id(id)? {
            info!("event=employee_update module=service status=not_found id={id}");
            return Ok(None);
        }

        let target = Employee {
            id: Some(id),
            ..employee.clone()
        };
        let updated = self.repo.save(&target)?;
        info!("event=employee_update module=service status=ok id={id}");
        Ok(Some(updated))
    }

    /// Removes an employee; unknown ids are a no-op.
    pub fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        self.repo.delete_by_id(id)?;
        info!("event=employee_delete module=service status=ok id={id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EmployeeService;
    use crate::model::employee::Employee;
    use crate::repo::employee_repo::{MockEmployeeRepository, RepoError};
    use mockall::predicate::eq;

    fn fixtures() -> Vec<Employee> {
        vec![
            Employee::with_id(1, "test employee", 99),
            Employee::with_id(2, "another test employee", 22),
            Employee::with_id(3, "one more test employee", 44),
        ]
    }

    #[test]
    fn find_all_delegates_once() {
        let employees = fixtures();
        let mut repo = MockEmployeeRepository::new();
        let returned = employees.clone();
        repo.expect_find_all()
            .times(1)
            .returning(move || Ok(returned.clone()));

        let service = EmployeeService::new(repo);
        assert_eq!(service.find_all().unwrap(), employees);
    }

    #[test]
    fn find_by_id_delegates_once() {
        let employee = fixtures().remove(0);
        let mut repo = MockEmployeeRepository::new();
        let returned = employee.clone();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = EmployeeService::new(repo);
        assert_eq!(service.find_by_id(1).unwrap(), Some(employee));
    }

    #[test]
    fn create_saves_once_as_transient() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_save()
            .withf(|employee| employee.id.is_none() && employee.name == "test employee")
            .times(1)
            .returning(|employee| {
                Ok(Employee {
                    id: Some(1),
                    ..employee.clone()
                })
            });

        let service = EmployeeService::new(repo);
        let created = service
            .create(&Employee::with_id(77, "test employee", 99))
            .unwrap();
        assert_eq!(created, Employee::with_id(1, "test employee", 99));
    }

    #[test]
    fn update_existing_checks_existence_then_saves() {
        let employee = fixtures().remove(0);
        let mut repo = MockEmployeeRepository::new();
        repo.expect_exists_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_save()
            .with(eq(employee.clone()))
            .times(1)
            .returning(|employee| Ok(employee.clone()));

        let service = EmployeeService::new(repo);
        assert_eq!(service.update(1, &employee).unwrap(), Some(employee));
    }

    #[test]
    fn update_missing_never_saves() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_exists_by_id()
            .with(eq(-1))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_save().never();

        let service = EmployeeService::new(repo);
        let result = service.update(-1, &fixtures()[1]).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn update_uses_path_id_over_payload_id() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(true));
        repo.expect_save()
            .withf(|employee| employee.id == Some(2))
            .times(1)
            .returning(|employee| Ok(employee.clone()));

        let service = EmployeeService::new(repo);
        let updated = service
            .update(2, &Employee::with_id(3, "renamed", 30))
            .unwrap()
            .unwrap();
        assert_eq!(updated, Employee::with_id(2, "renamed", 30));
    }

    #[test]
    fn delete_delegates_without_existence_check() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_exists_by_id().never();
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let service = EmployeeService::new(repo);
        service.delete_by_id(1).unwrap();
    }

    #[test]
    fn repository_errors_propagate() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_exists_by_id()
            .returning(|_| Err(RepoError::LockPoisoned));
        repo.expect_save().never();

        let service = EmployeeService::new(repo);
        let err = service.update(1, &fixtures()[0]).unwrap_err();
        assert!(matches!(err, RepoError::LockPoisoned));
    }
}
