//! Application error taxonomy and HTTP mapping.
//!
//! Every user-visible failure is one of four categories, each with a fixed
//! HTTP status. Response bodies carry only `{"success": false, "message"}`;
//! structured details stay in logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

/// Application-level error returned by services and handlers.
///
/// The `details` value is never serialized into responses. It is logged for
/// `Internal` errors and otherwise exists for tests and debugging.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input detected before any persistence attempt. Maps to 400.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Unknown short code, or a code that is unresolvable for redirects. Maps to 404.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Duplicate custom short code. Maps to 409.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Store failure or exhausted code-generation retries. Maps to 500.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message, .. } => (StatusCode::CONFLICT, message),
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = json!({ "success": false, "message": message });

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Short code already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "source": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request("Invalid request body", json!({ "errors": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let response = AppError::bad_request("bad url", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("bad url"));
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::not_found("missing", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_conflict_maps_to_409() {
        let response = AppError::conflict("taken", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_internal_maps_to_500() {
        let response = AppError::internal("boom", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_details_not_serialized() {
        let response =
            AppError::bad_request("bad url", json!({ "secret": "stack" })).into_response();
        let body = body_json(response).await;
        assert!(body.get("details").is_none());
        assert!(body.get("secret").is_none());
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::conflict("code taken", json!({ "shortCode": "abc123" }));
        assert_eq!(err.to_string(), "code taken");
    }
}
