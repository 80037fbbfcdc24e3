use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::StatusResponse;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("task {0} not found")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("stored timestamp is invalid: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

impl TaskError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Validation(message) => Self::bad_request(message),
            TaskError::NotFound(_) => Self::not_found(err.to_string()),
            TaskError::Storage(_) | TaskError::Timestamp(_) => {
                error!("request failed: {err}");
                Self::internal(err)
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

// Only integer ids are routable, so an unparseable segment is an unknown task.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::not_found(rejection.body_text())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(StatusResponse::error(self.message))).into_response()
    }
}
