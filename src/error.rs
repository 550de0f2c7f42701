//! Domain error taxonomy and its HTTP response mapping.
//!
//! Services translate store-level failures into [`AppError`] kinds at the
//! service boundary; constraint names and driver messages never cross it.
//! The routing layer returns `AppError` values directly thanks to the
//! [`IntoResponse`] implementation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    AliasNotFound { message: String, details: Value },
    StatsNotFound { message: String, details: Value },
    AliasTaken { message: String, details: Value },
    RelatedResourceNotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn alias_not_found(message: impl Into<String>, details: Value) -> Self {
        Self::AliasNotFound {
            message: message.into(),
            details,
        }
    }
    pub fn stats_not_found(message: impl Into<String>, details: Value) -> Self {
        Self::StatsNotFound {
            message: message.into(),
            details,
        }
    }
    pub fn alias_taken(message: impl Into<String>, details: Value) -> Self {
        Self::AliasTaken {
            message: message.into(),
            details,
        }
    }
    pub fn related_resource_not_found(message: impl Into<String>, details: Value) -> Self {
        Self::RelatedResourceNotFound {
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

    fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::AliasNotFound { message, .. }
            | AppError::StatsNotFound { message, .. }
            | AppError::AliasTaken { message, .. }
            | AppError::RelatedResourceNotFound { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Invalid input", json!({ "fields": errors }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::AliasNotFound { message, details } => {
                (StatusCode::NOT_FOUND, "alias_not_found", message, details)
            }
            AppError::StatsNotFound { message, details } => {
                (StatusCode::NOT_FOUND, "stats_not_found", message, details)
            }
            AppError::AliasTaken { message, details } => {
                (StatusCode::CONFLICT, "alias_taken", message, details)
            }
            AppError::RelatedResourceNotFound { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "related_resource_not_found",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("id is required", json!({}));
        assert_eq!(err.to_string(), "id is required");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let resp = AppError::bad_request("bad", json!({})).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_alias_not_found_maps_to_404() {
        let resp = AppError::alias_not_found("missing", json!({})).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_stats_not_found_maps_to_404() {
        let resp = AppError::stats_not_found("missing", json!({})).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_alias_taken_maps_to_409() {
        let resp = AppError::alias_taken("taken", json!({})).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_related_resource_maps_to_422() {
        let resp = AppError::related_resource_not_found("no owner", json!({})).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let resp = AppError::internal("boom", json!({})).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
