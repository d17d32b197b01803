use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Error returned by every handler, rendered as `{ "statusCode": …, "message": … }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    message: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }

    fn internal(detail: &str) -> Self {
        error!(error = %detail, "internal_error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { status_code: self.status.as_u16(), message: &self.message };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(ModelError::Validation(m)) => Self::bad_request(m),
            ServiceError::NotFound(m) | ServiceError::RecordNotFound(m) => Self::new(StatusCode::NOT_FOUND, m),
            ServiceError::Unauthorized(m) => Self::new(StatusCode::UNAUTHORIZED, m),
            ServiceError::Db(m) | ServiceError::Model(ModelError::Db(m)) => Self::internal(&m),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self { Self::bad_request(rejection.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self { Self::bad_request(rejection.body_text()) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
