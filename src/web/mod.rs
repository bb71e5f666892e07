//! HTTP Interface
//!
//! Routes, handlers, the CORS gate and the mapping from domain errors to
//! JSON responses.

pub mod cors;
pub mod handlers;
pub mod router;

use crate::core::MovieError;
use crate::json::{IssueCode, ValidationErrors, ValidationIssue};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub use cors::{AllowedOrigins, DEFAULT_ALLOWED_ORIGINS};
pub use router::{AppState, build_router};

pub const MOVIE_NOT_FOUND_MESSAGE: &str = "Movie Not Found";
pub const MOVIE_DELETED_MESSAGE: &str = "Movie Deleted";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub name: &'static str,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug)]
pub enum WebError {
    Validation(ValidationErrors),
    InvalidJson(String),
    NotFound,
    Internal(String),
}

impl From<MovieError> for WebError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::Validation(errors) => Self::Validation(errors),
            MovieError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidJson(rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Validation(errors) => validation_response(errors.into_issues()),
            WebError::InvalidJson(message) => validation_response(vec![ValidationIssue::new(
                IssueCode::InvalidJson,
                vec![],
                message,
            )]),
            WebError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new(MOVIE_NOT_FOUND_MESSAGE)),
            )
                .into_response(),
            WebError::Internal(message) => {
                error!(%message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new(message)),
                )
                    .into_response()
            }
        }
    }
}

fn validation_response(issues: Vec<ValidationIssue>) -> Response {
    let body = Json(ValidationResponse {
        name: "ValidationError",
        issues,
    });
    (StatusCode::BAD_REQUEST, body).into_response()
}

pub type WebResult<T> = std::result::Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::WebError;
    use crate::core::MovieError;
    use crate::json::{IssueCode, ValidationErrors, ValidationIssue};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn not_found_maps_to_404() {
        let response = WebError::from(MovieError::NotFound("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let errors = ValidationErrors::single(ValidationIssue::field(
            IssueCode::Required,
            "title",
            "title is required",
        ));
        let response = WebError::from(MovieError::Validation(errors)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_domain_errors_map_to_500() {
        let mapped = WebError::from(MovieError::DuplicateId("a1".to_string()));
        match mapped {
            WebError::Internal(message) => assert_eq!(message, "Duplicate movie id 'a1'"),
            other => panic!("expected internal web error, got {other:?}"),
        }
    }
}
