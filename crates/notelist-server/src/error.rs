//! API error types with JSON responses.
//!
//! This is the sole place where the store's failure taxonomy is
//! translated to wire format. Every failure renders as
//! `{"message": <fixed text>}`; nothing internal leaks to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notelist_store::StoreError;
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unsupported verb on a known path (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// No route matched the path (404).
    #[error("path not found")]
    PathNotFound,

    /// Failure surfaced by the data-access layer.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PathNotFound => StatusCode::NOT_FOUND,
            Self::Store(e) => match e {
                StoreError::InvalidRequest
                | StoreError::InvalidListId
                | StoreError::InvalidNoteFormat
                | StoreError::ConstraintViolation => StatusCode::BAD_REQUEST,
                StoreError::NoteNotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the fixed user-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::PathNotFound => "Path not found",
            Self::Store(e) => match e {
                StoreError::InvalidRequest => "Invalid request",
                StoreError::InvalidListId => "Invalid list requested",
                StoreError::InvalidNoteFormat => "Invalid note format",
                StoreError::NoteNotFound => "Note not found",
                StoreError::ConstraintViolation => "Invalid Request",
                _ => "Internal Server Error",
            },
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Fixed user-facing message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_map_to_fixed_status_and_message() {
        let cases = [
            (StoreError::InvalidRequest, 400, "Invalid request"),
            (StoreError::InvalidListId, 400, "Invalid list requested"),
            (StoreError::InvalidNoteFormat, 400, "Invalid note format"),
            (StoreError::NoteNotFound, 404, "Note not found"),
            (StoreError::ConstraintViolation, 400, "Invalid Request"),
        ];
        for (store_err, status, message) in cases {
            let err = ApiError::from(store_err);
            assert_eq!(err.status_code().as_u16(), status);
            assert_eq!(err.message(), message);
        }
    }

    #[test]
    fn unclassified_failures_degrade_to_internal() {
        let err = ApiError::from(StoreError::Config("oops".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal Server Error");

        let err = ApiError::from(StoreError::Database(sqlx_row_not_found()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn router_level_errors() {
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::MethodNotAllowed.message(), "Method Not Allowed");
        assert_eq!(ApiError::PathNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::PathNotFound.message(), "Path not found");
    }

    fn sqlx_row_not_found() -> sqlx::Error {
        sqlx::Error::RowNotFound
    }
}
