//! JSON controller under `/api/employees`.
//!
//! Absence maps to an empty 404; successful create/update answer 202.

use crate::error::WebError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use employees_core::{Employee, EmployeeId, EmployeeRepository};

pub fn routes<R: EmployeeRepository + 'static>() -> Router<AppState<R>> {
    Router::new()
        .route("/api/employees", get(list::<R>).post(create::<R>))
        .route(
            "/api/employees/{id}",
            get(find_by_id::<R>)
                .put(update::<R>)
                .delete(delete::<R>),
        )
}

async fn list<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Employee>>, WebError> {
    let employees = state.call(|service| service.find_all()).await?;
    Ok(Json(employees))
}

async fn find_by_id<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
) -> Result<Response, WebError> {
    let employee = state.call(move |service| service.find_by_id(id)).await?;
    Ok(json_or_not_found(StatusCode::OK, employee))
}

async fn create<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Json(employee): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), WebError> {
    let created = state.call(move |service| service.create(&employee)).await?;
    Ok((StatusCode::ACCEPTED, Json(created)))
}

async fn update<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
    Json(employee): Json<Employee>,
) -> Result<Response, WebError> {
    let updated = state
        .call(move |service| service.update(id, &employee))
        .await?;
    Ok(json_or_not_found(StatusCode::ACCEPTED, updated))
}

async fn delete<R: EmployeeRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<EmployeeId>,
) -> Result<StatusCode, WebError> {
    state.call(move |service| service.delete_by_id(id)).await?;
    Ok(StatusCode::OK)
}

fn json_or_not_found(status: StatusCode, employee: Option<Employee>) -> Response {
    match employee {
        Some(employee) => (status, Json(employee)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
