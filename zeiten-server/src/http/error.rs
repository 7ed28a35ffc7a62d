//! API error types with IntoResponse
//!
//! Every error becomes `{"error": "..."}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Database error (500), underlying message sent to the client
    Database(DbError),

    /// Database error (500), only `message` sent to the client
    Opaque {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a `DbError` to a 500 that hides the underlying message.
    ///
    /// ```ignore
    /// store.create_verein(name).await.map_err(ApiError::opaque("Fehler beim Anlegen des Vereins"))?;
    /// ```
    pub fn opaque(message: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Opaque { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Opaque { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => {
                tracing::debug!("Validation error: {}", e);
                e.to_string()
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                e.message()
            }
            Self::Opaque { message, source } => {
                tracing::error!(error = %source, "{}", message);
                message.to_owned()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
