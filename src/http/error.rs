//! Error type for HTTP handlers and its mapping onto responses.

use std::error::Error;
use std::fmt;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;
use crate::validation::ValidationErrors;

#[derive(Debug)]
pub enum ApiError {
    /// The payload broke one or more schema rules.
    Validation(ValidationErrors),
    /// No movie has the requested id.
    NotFound,
    /// The request could not be decoded (body or query string).
    BadRequest(String),
    /// The declared origin is not on the allow-list.
    OriginNotAllowed(String),
    /// Storage failure.
    Store(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => write!(f, "{}", errors),
            ApiError::NotFound => write!(f, "Movie not found"),
            ApiError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            ApiError::OriginNotAllowed(origin) => {
                write!(f, "origin not allowed by CORS: {}", origin)
            }
            ApiError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            ApiError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::OriginNotAllowed(_) => StatusCode::FORBIDDEN,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Validation(errors) => {
                tracing::warn!(violations = errors.len(), "rejected invalid movie payload");
                json!({ "error": errors })
            }
            ApiError::NotFound => json!({ "message": "Movie not found" }),
            ApiError::BadRequest(msg) => {
                tracing::warn!(reason = %msg, "rejected malformed request");
                json!({ "message": msg })
            }
            ApiError::OriginNotAllowed(origin) => {
                tracing::warn!(origin = %origin, "rejected cross-origin request");
                json!({ "message": "Not allowed by CORS" })
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "movie store failure");
                json!({ "message": e.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}
