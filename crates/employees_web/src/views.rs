//! Server-rendered pages for the browser surface.
//!
//! Each page carries its template name in the `x-view-name` response header
//! so callers (and tests) can tell which view answered.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use employees_core::Employee;

pub const LIST_VIEW: &str = "employees/employees";
pub const DETAIL_VIEW: &str = "employees/employee";
pub const EDIT_VIEW: &str = "employees/edit";

pub const VIEW_NAME_HEADER: &str = "x-view-name";

/// A rendered template plus the status it should be served with.
#[derive(Debug)]
pub struct View {
    pub name: &'static str,
    pub status: StatusCode,
    pub body: String,
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        (
            self.status,
            [
                (
                    CONTENT_TYPE,
                    HeaderValue::from_static("text/html; charset=utf-8"),
                ),
                (
                    HeaderName::from_static(VIEW_NAME_HEADER),
                    HeaderValue::from_static(self.name),
                ),
            ],
            self.body,
        )
            .into_response()
    }
}

/// Employee table plus a blank create form bound to `new_employee`.
pub fn employees(employees: &[Employee], new_employee: &Employee) -> View {
    let mut rows = String::new();
    for employee in employees {
        let id = employee.id.unwrap_or_default();
        rows.push_str(&format!(
            "<tr><td>{id}</td><td><a href=\"/employees/{id}\">{}</a></td><td>{}</td></tr>",
            escape(&employee.name),
            employee.age
        ));
    }

    let body = format!(
        "<h1>Employees</h1>\
         <table><thead><tr><th>Id</th><th>Name</th><th>Age</th></tr></thead><tbody>{rows}</tbody></table>\
         <h2>New employee</h2>\
         <form method=\"post\" action=\"/employees\">{}<button type=\"submit\">Create</button></form>",
        employee_fields(new_employee)
    );
    ok(LIST_VIEW, "Employees", body)
}

/// Detail page; renders a not-found notice with 404 when `employee` is absent.
pub fn employee(id: i64, employee: Option<&Employee>) -> View {
    let Some(employee) = employee else {
        return not_found(DETAIL_VIEW, id);
    };

    let body = format!(
        "<h1>{name}</h1>\
         <dl><dt>Id</dt><dd>{id}</dd><dt>Name</dt><dd>{name}</dd><dt>Age</dt><dd>{age}</dd></dl>\
         <p><a href=\"/employees/{id}/edit\">Edit</a> | <a href=\"/employees\">Back</a></p>\
         <form method=\"post\" action=\"/employees/{id}\">\
         <input type=\"hidden\" name=\"_method\" value=\"delete\">\
         <button type=\"submit\">Delete</button></form>",
        name = escape(&employee.name),
        age = employee.age
    );
    ok(DETAIL_VIEW, "Employee", body)
}

/// Edit form pre-populated with the stored values.
pub fn edit(id: i64, employee: Option<&Employee>) -> View {
    let Some(employee) = employee else {
        return not_found(EDIT_VIEW, id);
    };

    let body = format!(
        "<h1>Edit employee {id}</h1>\
         <form method=\"post\" action=\"/employees/{id}\">\
         <input type=\"hidden\" name=\"_method\" value=\"put\">\
         {}<button type=\"submit\">Save</button></form>\
         <p><a href=\"/employees/{id}\">Cancel</a></p>",
        employee_fields(employee)
    );
    ok(EDIT_VIEW, "Edit employee", body)
}

fn employee_fields(employee: &Employee) -> String {
    // Transient records render an empty age box rather than a default 0.
    let age = if employee.is_persisted() {
        employee.age.to_string()
    } else {
        String::new()
    };
    format!(
        "<label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\
         <label>Age <input type=\"number\" name=\"age\" value=\"{age}\"></label>",
        escape(&employee.name)
    )
}

fn not_found(name: &'static str, id: i64) -> View {
    View {
        name,
        status: StatusCode::NOT_FOUND,
        body: layout(
            "Employee not found",
            &format!("<h1>Employee {id} not found</h1><p><a href=\"/employees\">Back</a></p>"),
        ),
    }
}

fn ok(name: &'static str, title: &str, content: String) -> View {
    View {
        name,
        status: StatusCode::OK,
        body: layout(title, &content),
    }
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body>{content}</body></html>"
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
