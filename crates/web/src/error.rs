//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use podium_core::error::{DomainError, StorageError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid page number: {0:?}")]
    InvalidPageNumber(String),

    #[error("Leaderboard is temporarily unavailable")]
    StorageUnavailable(String),

    #[error("Internal error")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidPageNumber(raw) => AppError::InvalidPageNumber(raw),
            DomainError::Storage(
                e @ (StorageError::Unavailable(_) | StorageError::ConnectionError(_)),
            ) => AppError::StorageUnavailable(e.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidPageNumber(_) => StatusCode::BAD_REQUEST,
            AppError::StorageUnavailable(detail) => {
                warn!(detail = %detail, "Serving storage unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Internal(detail) => {
                error!(detail = %detail, "❌ Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (
                DomainError::InvalidPageNumber("abc".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Storage(StorageError::Unavailable("pool timed out".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                DomainError::Storage(StorageError::QueryError("syntax".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    // Test critique: les détails internes ne fuient pas vers le client
    #[test]
    fn test_internal_details_are_not_exposed() {
        let err = AppError::from(DomainError::Storage(StorageError::QueryError(
            "relation node_record_table does not exist".into(),
        )));
        assert_eq!(err.to_string(), "Internal error");
    }
}
