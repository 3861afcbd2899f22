//! Leaderboard repository implementation for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, trace};

use podium_core::error::{StorageError, StorageResult};
use podium_core::models::LeaderboardEntry;
use podium_core::ports::LeaderboardRepository;

use super::database::Database;
use super::helpers::{count_to_u64, map_sqlx_error};

/// Count every ranked row.
const COUNT_ENTRIES_SQL: &str = "SELECT COUNT(*) FROM node_record_table";

/// Fetch one slice of the ranking.
///
/// Rows without a score yet rank as 0. The key tie-break keeps the order
/// total so that OFFSET slices are disjoint; it compares bytes ("C"
/// collation) whatever the database default.
const LIST_ENTRIES_SQL: &str = r#"
    SELECT block_producer_key,
           COALESCE(score, 0)::DOUBLE PRECISION AS score
    FROM node_record_table
    ORDER BY COALESCE(score, 0) DESC, block_producer_key COLLATE "C" ASC
    OFFSET $1
    LIMIT $2
"#;

/// PostgreSQL implementation of LeaderboardRepository.
pub struct PgLeaderboardRepository {
    db: Database,
}

impl PgLeaderboardRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}

#[async_trait]
impl LeaderboardRepository for PgLeaderboardRepository {
    #[instrument(skip(self))]
    async fn count_entries(&self) -> StorageResult<u64> {
        let row: (i64,) = sqlx::query_as(COUNT_ENTRIES_SQL)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        trace!(count = row.0, "Counted leaderboard entries");
        count_to_u64(row.0, "node_record_table.count")
    }

    #[instrument(skip(self))]
    async fn list_entries(&self, offset: u64, limit: u32) -> StorageResult<Vec<LeaderboardEntry>> {
        let offset = i64::try_from(offset).map_err(|_| {
            StorageError::QueryError(format!("offset {offset} exceeds the supported range"))
        })?;

        let rows: Vec<EntryRow> = sqlx::query_as(LIST_ENTRIES_SQL)
            .bind(offset)
            .bind(i64::from(limit))
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        trace!(rows = rows.len(), "Fetched leaderboard slice");
        Ok(rows.into_iter().map(EntryRow::into_entry).collect())
    }

    async fn is_healthy(&self) -> bool {
        self.db.is_healthy().await
    }
}

/// Database row representation for LeaderboardEntry.
#[derive(sqlx::FromRow)]
struct EntryRow {
    block_producer_key: String,
    score: f64,
}

impl EntryRow {
    fn into_entry(self) -> LeaderboardEntry {
        LeaderboardEntry {
            public_key: self.block_producer_key,
            score: self.score,
        }
    }
}
