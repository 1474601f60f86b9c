//! Transport-level error mapping.
//!
//! Storage failures surface as 500 on both surfaces. Details go to the log;
//! clients only see a category and a generic message.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use employees_core::RepoError;
use log::error;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("storage failure: {0}")]
    Repo(#[from] RepoError),

    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl WebError {
    fn category(&self) -> &'static str {
        match self {
            Self::Repo(_) => "storage",
            Self::Join(_) => "internal",
        }
    }

    fn log(&self, surface: &str) {
        error!(
            "event=request_failed module=web status=error surface={surface} category={} error={}",
            self.category(),
            self
        );
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        self.log("api");
        let body = json!({
            "error": {
                "category": self.category(),
                "message": "internal server error",
            }
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// `WebError` rendered for browsers instead of API clients.
#[derive(Debug)]
pub struct PageError(pub WebError);

impl From<WebError> for PageError {
    fn from(value: WebError) -> Self {
        Self(value)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0.log("html");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!DOCTYPE html><html><body><h1>Internal Server Error</h1></body></html>"),
        )
            .into_response()
    }
}
