use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Validation(details) => {
                let body = Json(json!({ "error": "Validation failed", "details": details }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            Error::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Error::InvalidFilter(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Error::MalformedRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            // Storage failures are logged in full server-side and surfaced to
            // the client as a generic message, never the raw driver text.
            Error::Database(err) => {
                tracing::error!(error = ?err, "Storage operation failed");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            other => {
                tracing::error!(error = ?other, "Unhandled internal error");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    let body = Json(json!({ "error": message }));
    (status, body).into_response()
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
