//! Global application error types and handlers.
//!
//! This module defines the error taxonomy shared across the backend and maps
//! each failure class onto an HTTP response. Responses only ever carry a safe
//! human-readable message; the underlying detail of unexpected failures is
//! logged server-side when the response is built.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::errors::AuthError;
use crate::database::queries::DatabaseError;

/// Failure classes surfaced at the operation boundary.
///
/// `InvalidCredentials` deliberately shares the not-found status class so an
/// unknown username and a wrong password are indistinguishable to callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::InvalidCredentials => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "request failed with internal error");
                "Internal server error".to_owned()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::StudentNotFound => ApiError::NotFound("Student not found".to_owned()),
            DatabaseError::CourseNotFound => ApiError::NotFound("Course not found".to_owned()),
            DatabaseError::CourseCapReached => ApiError::Conflict(
                "Student is already assigned the maximum number of courses".to_owned(),
            ),
            DatabaseError::CourseAlreadyAssigned => {
                ApiError::Conflict("Student is already assigned to this course".to_owned())
            }
            // Duplicate usernames surface from registration as a persistence
            // failure, not a dedicated conflict class.
            DatabaseError::DuplicateUsername(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::Database(db) => db.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn internal_detail_is_not_leaked() {
        let response =
            ApiError::Internal("username 'amara' is already taken".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Internal server error");
        assert!(!body_contains(&json, "amara"));
    }

    fn body_contains(json: &serde_json::Value, needle: &str) -> bool {
        json.to_string().contains(needle)
    }

    #[test]
    fn database_errors_map_to_expected_classes() {
        assert!(matches!(
            ApiError::from(DatabaseError::StudentNotFound),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(DatabaseError::CourseCapReached),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(DatabaseError::DuplicateUsername("a".into())),
            ApiError::Internal(_)
        ));
    }
}
