//! Error types for the leaderboard domain layer.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`DomainError`] - Request validation and business rule errors
//! - [`StorageError`] - Database/repository errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Domain Errors
// =============================================================================

/// Request validation and domain rule violations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Page number is not an integer.
    #[error("Invalid page number: {0:?}")]
    InvalidPageNumber(String),

    /// Page size is outside the accepted range.
    #[error("Invalid page size {size}: must be between 1 and {max}")]
    InvalidPageSize {
        /// Rejected size.
        size: u32,
        /// Largest accepted size.
        max: u32,
    },

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DomainError {
    /// Whether this error was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidPageNumber(_) | DomainError::InvalidPageSize { .. }
        )
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Database and repository errors.
///
/// These errors originate from storage operations like queries
/// and row decoding.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to establish database connection.
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// The store could not be reached (pool exhausted, connection lost, I/O).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// SQL query execution failed.
    #[error("Query execution error: {0}")]
    QueryError(String),

    /// Data serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl StorageError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::ConnectionError(_) => "connection",
            StorageError::Unavailable(_) => "unavailable",
            StorageError::QueryError(_) => "query",
            StorageError::SerializationError(_) => "serialization",
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    // Test critique: la conversion Storage -> Domain préserve le message
    #[test]
    fn test_storage_error_converts_into_domain_error() {
        let storage_err = StorageError::Unavailable("pool timed out".into());
        let domain_err: DomainError = storage_err.into();

        assert!(matches!(
            domain_err,
            DomainError::Storage(StorageError::Unavailable(_))
        ));
        assert!(domain_err.to_string().contains("pool timed out"));
        assert!(!domain_err.is_client_error());
    }

    #[test]
    fn test_invalid_page_number_is_client_error() {
        let err = DomainError::InvalidPageNumber("abc".into());
        assert!(err.is_client_error());
        // La valeur fautive est visible pour le debug
        assert!(err.to_string().contains("\"abc\""));
    }
}
