use employees_core::db::open_db_in_memory;
use employees_core::{
    Employee, EmployeeRepository, EmployeeService, InMemoryEmployeeRepository,
    SqliteEmployeeRepository,
};

fn sqlite_service() -> EmployeeService<SqliteEmployeeRepository> {
    let repo = SqliteEmployeeRepository::try_new(open_db_in_memory().unwrap()).unwrap();
    EmployeeService::new(repo)
}

fn memory_service() -> EmployeeService<InMemoryEmployeeRepository> {
    EmployeeService::new(InMemoryEmployeeRepository::new())
}

fn seed<R: EmployeeRepository>(service: &EmployeeService<R>) -> Vec<Employee> {
    vec![
        service.create(&Employee::new("test one", 11)).unwrap(),
        service.create(&Employee::new("test two", 22)).unwrap(),
        service.create(&Employee::new("test three", 33)).unwrap(),
    ]
}

fn check_create_then_find<R: EmployeeRepository>(service: EmployeeService<R>) {
    let before = service.find_all().unwrap().len();

    let created = service
        .create(&Employee::new("employee for posting", 99))
        .unwrap();
    let id = created.id.expect("create assigns an id");

    assert_eq!(service.find_by_id(id).unwrap(), Some(created));
    assert_eq!(service.find_all().unwrap().len(), before + 1);
}

fn check_update_existing<R: EmployeeRepository>(service: EmployeeService<R>) {
    let employees = seed(&service);
    let target = &employees[1];
    let id = target.id.unwrap();

    let changes = Employee::new(format!("{} updated", target.name), (target.age + 1) * 2);
    let updated = service.update(id, &changes).unwrap().unwrap();

    assert_eq!(updated, Employee::with_id(id, "test two updated", 46));
    assert_eq!(service.find_by_id(id).unwrap(), Some(updated));
    assert_eq!(service.find_all().unwrap().len(), employees.len());
}

fn check_update_missing<R: EmployeeRepository>(service: EmployeeService<R>) {
    let employees = seed(&service);

    let result = service.update(-1, &Employee::new("ghost", 1)).unwrap();

    assert!(result.is_none());
    assert_eq!(service.find_all().unwrap(), employees);
}

fn check_delete<R: EmployeeRepository>(service: EmployeeService<R>) {
    let employees = seed(&service);
    let removed = &employees[1];

    service.delete_by_id(removed.id.unwrap()).unwrap();

    let remaining = service.find_all().unwrap();
    assert_eq!(remaining.len(), employees.len() - 1);
    assert!(remaining
        .iter()
        .all(|e| !(e.name == removed.name && e.age == removed.age)));

    service.delete_by_id(-1).unwrap();
    assert_eq!(service.find_all().unwrap().len(), employees.len() - 1);
}

#[test]
fn sqlite_create_then_find_returns_equal_record() {
    check_create_then_find(sqlite_service());
}

#[test]
fn memory_create_then_find_returns_equal_record() {
    check_create_then_find(memory_service());
}

#[test]
fn sqlite_update_existing_persists_exact_fields() {
    check_update_existing(sqlite_service());
}

#[test]
fn memory_update_existing_persists_exact_fields() {
    check_update_existing(memory_service());
}

#[test]
fn sqlite_update_missing_leaves_store_unchanged() {
    check_update_missing(sqlite_service());
}

#[test]
fn memory_update_missing_leaves_store_unchanged() {
    check_update_missing(memory_service());
}

#[test]
fn sqlite_delete_shrinks_store_and_tolerates_missing_ids() {
    check_delete(sqlite_service());
}

#[test]
fn memory_delete_shrinks_store_and_tolerates_missing_ids() {
    check_delete(memory_service());
}

#[test]
fn create_ignores_client_supplied_id() {
    let service = sqlite_service();
    let existing = seed(&service);

    let created = service
        .create(&Employee::with_id(existing[0].id.unwrap(), "intruder", 50))
        .unwrap();

    assert_ne!(created.id, existing[0].id);
    assert_eq!(service.find_by_id(existing[0].id.unwrap()).unwrap(), Some(existing[0].clone()));
}
