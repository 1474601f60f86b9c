//! Browser-facing controller under `/employees`.
//!
//! # Responsibility
//! - Map page requests and form posts to service calls.
//! - Pick a view per read action; answer every mutation with a 302.
//!
//! # Invariants
//! - Plain HTML forms reach PUT/DELETE through `POST` + `_method`.
//! - A blank age box binds to 0, like a missing one.

use crate::error::PageError;
use crate::state::AppState;
use crate::views::{self, View};
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use employees_core::{Employee, EmployeeId, EmployeeRepository};
use log::warn;
use serde::{Deserialize, Deserializer};

/// Fields posted by the create and edit forms.
#[derive(Debug, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub age: i32,
}

impl From<EmployeeForm> for Employee {
    fn from(form: EmployeeForm) -> Self {
        Employee::new(form.name, form.age)
    }
}

/// Form body for `POST /employees/{id}` carrying a hidden method override.
#[derive(Debug, Deserialize)]
pub struct OverrideForm {
    #[serde(rename = "_method")]
    pub method: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_zero")]
    pub age: i32,
}

// Browsers submit an untouched number input as `age=`.
fn blank_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(serde::de::Error::custom)
}

pub fn routes<R: EmployeeRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route("/employees", get(list::<R>).post(create::<R>))
        .route(
            "/employees/{id}",
            get(detail::<R>)
                .put(update::<R>)
                .delete(delete::<R>)
                .post(method_override::<R>),
        )
        .route("/employees/{id}/edit", get(edit_form::<R>))
}

async fn list<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<View, PageError> {
    let employees = state.call(|service| service.find_all()).await?;
    Ok(views::employees(&employees, &Employee::default()))
}

async fn detail<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
) -> Result<View, PageError> {
    let employee = state.call(move |service| service.find_by_id(id)).await?;
    Ok(views::employee(id, employee.as_ref()))
}

async fn create<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, PageError> {
    let employee = Employee::from(form);
    state.call(move |service| service.create(&employee)).await?;
    Ok(found("/employees".to_string()))
}

async fn edit_form<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
) -> Result<View, PageError> {
    let employee = state.call(move |service| service.find_by_id(id)).await?;
    Ok(views::edit(id, employee.as_ref()))
}

async fn update<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
    Form(form): Form<EmployeeForm>,
) -> Result<Response, PageError> {
    apply_update(&state, id, form.into()).await
}

async fn delete<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
) -> Result<Response, PageError> {
    apply_delete(&state, id).await
}

async fn method_override<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
    Form(form): Form<OverrideForm>,
) -> Result<Response, PageError> {
    match form.method.trim().to_ascii_lowercase().as_str() {
        "put" => apply_update(&state, id, Employee::new(form.name, form.age)).await,
        "delete" => apply_delete(&state, id).await,
        other => {
            warn!("event=method_override module=web status=rejected method={other} id={id}");
            Ok(StatusCode::METHOD_NOT_ALLOWED.into_response())
        }
    }
}

// Redirects to the detail page even when the id is unknown; the page itself
// reports the absence.
async fn apply_update<R: EmployeeRepository + 'static>(
    state: &AppState<R>,
    id: EmployeeId,
    employee: Employee,
) -> Result<Response, PageError> {
    state
        .call(move |service| service.update(id, &employee))
        .await?;
    Ok(found(format!("/employees/{id}")))
}

async fn apply_delete<R: EmployeeRepository + 'static>(
    state: &AppState<R>,
    id: EmployeeId,
) -> Result<Response, PageError> {
    state.call(move |service| service.delete_by_id(id)).await?;
    Ok(found("/employees".to_string()))
}

fn found(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
