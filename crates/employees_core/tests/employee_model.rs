use employees_core::Employee;
use serde_json::json;

#[test]
fn transient_employee_serializes_null_id() {
    let employee = Employee::new("employee for posting", 99);

    assert!(!employee.is_persisted());
    assert_eq!(
        serde_json::to_value(&employee).unwrap(),
        json!({"id": null, "name": "employee for posting", "age": 99})
    );
}

#[test]
fn deserialize_tolerates_missing_fields() {
    let employee: Employee = serde_json::from_value(json!({"name": "only name"})).unwrap();
    assert_eq!(employee, Employee::new("only name", 0));

    let empty: Employee = serde_json::from_value(json!({})).unwrap();
    assert_eq!(empty, Employee::default());
}

#[test]
fn equality_covers_id_name_and_age() {
    let base = Employee::with_id(1, "same", 30);

    assert_eq!(base, Employee::with_id(1, "same", 30));
    assert_ne!(base, Employee::with_id(2, "same", 30));
    assert_ne!(base, Employee::with_id(1, "other", 30));
    assert_ne!(base, Employee::with_id(1, "same", 31));
    assert_ne!(base, Employee::new("same", 30));
}
