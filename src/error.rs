// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Service errors and their HTTP mapping.
//!
//! | Variant | Status | `detail` |
//! |---------|--------|----------|
//! | [`AppError::Validation`] | 422 | Rejection message |
//! | [`AppError::Rejected`] | From the rejection (e.g. 413) | Rejection message |
//! | [`AppError::NotFound`] | 404 | `Item not found` |
//! | [`AppError::Storage`] | 500 | `Internal Server Error` |
//!
//! Storage failures are logged and never echoed to the client.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response}
};
use itemstore_core::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Error returned by every handler.
#[derive(Debug, Error)]
pub enum AppError {
    /// Payload or path parameter failed type or presence checks.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read at all, such as one over the body
    /// size limit.
    #[error("{detail}")]
    Rejected {
        /// Status reported by the rejection.
        status: StatusCode,
        /// Rejection message.
        detail: String
    },

    /// No row for the requested id.
    #[error("Item not found")]
    NotFound,

    /// The store failed.
    #[error(transparent)]
    Storage(#[from] StoreError)
}

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    /// Human-readable reason.
    pub detail: String
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Rejected {
                status, ..
            } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(StoreError::from(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => Self::Validation(rejection.body_text()),
            other => Self::Rejected {
                status: other.status(),
                detail: other.body_text()
            }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            Self::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                "Internal Server Error".to_string()
            }
            other => other.to_string()
        };
        let body = ErrorBody {
            detail
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_404_with_fixed_detail() {
        let (status, body) = body(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Item not found");
    }

    #[tokio::test]
    async fn validation_is_422() {
        let (status, body) = body(AppError::Validation("missing field `name`".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.detail, "missing field `name`");
    }

    #[tokio::test]
    async fn storage_is_500_without_details() {
        let err = AppError::from(sqlx::Error::Protocol("disk I/O error at page 3".into()));
        let (status, body) = body(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.detail, "Internal Server Error");
    }

    #[tokio::test]
    async fn rejected_keeps_its_status() {
        let err = AppError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            detail: "length limit exceeded".into()
        };
        let (status, body) = body(err).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body.detail, "length limit exceeded");
    }

    #[test]
    fn store_errors_keep_their_step() {
        let err = AppError::from(StoreError::Acquire(sqlx::Error::PoolTimedOut));
        assert!(matches!(err, AppError::Storage(StoreError::Acquire(_))));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
