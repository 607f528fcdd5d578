use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::models::common::ApiResponse;

/// Failures raised by the Postgres-backed stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Record not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = error {
            return StoreError::NotFound;
        }
        if let sqlx::Error::Database(db_error) = &error {
            if db_error.is_unique_violation() {
                return StoreError::Conflict(db_error.message().to_string());
            }
        }
        StoreError::Database(error)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Store(StoreError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body: ApiResponse<()> = match self {
            AppError::Validation(e) => ApiResponse::error_with_message("Validation failed", e.to_string()),
            AppError::NotFound(message) => ApiResponse::error_with_message(message.clone(), "Not found"),
            AppError::Store(StoreError::NotFound) => {
                ApiResponse::error_with_message("Resource not found", "Not found")
            }
            AppError::Store(StoreError::Conflict(detail)) => {
                ApiResponse::error_with_message("Resource already exists", detail.clone())
            }
            AppError::Store(e) => {
                tracing::error!("Database error: {:?}", e);
                ApiResponse::error_with_message("An internal error occurred", "Database error")
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
