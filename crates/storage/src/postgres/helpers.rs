//! Shared helpers for PostgreSQL error and row conversion.

use podium_core::error::StorageError;

/// Map a `sqlx` error onto the storage error hierarchy.
///
/// Errors that mean the database could not be reached become
/// [`StorageError::Unavailable`]; everything else is a query failure.
pub fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => {
            StorageError::Unavailable(err.to_string())
        }
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => StorageError::Unavailable(err.to_string()),
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StorageError::SerializationError(err.to_string())
        }
        other => StorageError::QueryError(other.to_string()),
    }
}

/// Convert a count returned by PostgreSQL into an unsigned total.
pub fn count_to_u64(count: i64, field_name: &str) -> Result<u64, StorageError> {
    u64::try_from(count).map_err(|_| {
        StorageError::SerializationError(format!("{field_name} is negative: {count}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test critique: un pool saturé se traduit par "storage unavailable"
    #[test]
    fn test_pool_errors_are_unavailable() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StorageError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StorageError::Unavailable(_)
        ));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            map_sqlx_error(sqlx::Error::Io(io)),
            StorageError::Unavailable(_)
        ));
    }

    #[test]
    fn test_other_errors_are_query_errors() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StorageError::QueryError(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::Protocol("bad message".into())),
            StorageError::QueryError(_)
        ));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        assert_eq!(count_to_u64(45, "count").unwrap(), 45);
        let err = count_to_u64(-1, "node_record_table.count").unwrap_err();
        assert!(err.to_string().contains("node_record_table.count"));
    }
}
