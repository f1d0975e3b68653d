use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ApiResponse;
use crate::services::{CatalogError, PassportError, ScanError, UserError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    Conflict(String),

    InternalError(String),

    Unauthorized(String),

    Forbidden(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
        };

        let body = ApiResponse::<()>::error(error_message);
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(format!("{err:#}"))
    }
}

impl From<PassportError> for ApiError {
    fn from(err: PassportError) -> Self {
        match err {
            PassportError::UserNotFound(_)
            | PassportError::GarmentNotFound(_)
            | PassportError::TagCodeNotFound(_)
            | PassportError::BadgeNotFound(_) => ApiError::NotFound(err.to_string()),
            PassportError::Forbidden(msg) => ApiError::Forbidden(msg),
            PassportError::AlreadyStamped { .. } | PassportError::AlreadyAwarded { .. } => {
                ApiError::Conflict(err.to_string())
            }
            PassportError::Validation(msg) => ApiError::ValidationError(msg),
            PassportError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            CatalogError::Conflict(msg) => ApiError::Conflict(msg),
            CatalogError::Validation(msg) => ApiError::ValidationError(msg),
            CatalogError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<ScanError> for ApiError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::TagNotFound { .. }
            | ScanError::GarmentNotFound(_)
            | ScanError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            ScanError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailTaken(_) => ApiError::Conflict(err.to_string()),
            UserError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_expected_statuses() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (
                PassportError::UserNotFound("u".into()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                PassportError::AlreadyStamped {
                    user_id: "u".into(),
                    garment_id: "g".into(),
                }
                .into(),
                StatusCode::CONFLICT,
            ),
            (
                PassportError::Forbidden("no".into()).into(),
                StatusCode::FORBIDDEN,
            ),
            (
                CatalogError::Conflict("taken".into()).into(),
                StatusCode::CONFLICT,
            ),
            (
                ScanError::TagNotFound {
                    scan_type: "nfc",
                    value: "x".into(),
                }
                .into(),
                StatusCode::NOT_FOUND,
            ),
            (
                UserError::Database("locked".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
