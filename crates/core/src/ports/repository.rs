//! Port trait for leaderboard storage.
//!
//! This trait defines the storage interface used by the domain layer.
//! Implementations live in the infrastructure layer (e.g., `podium-storage`).

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::models::LeaderboardEntry;

/// Read-only access to the ranked set of leaderboard entries.
///
/// Implementations must order entries by score descending, with a stable
/// tie-break, so that consecutive slices neither overlap nor skip rows.
#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Count all entries in the ranking.
    async fn count_entries(&self) -> StorageResult<u64>;

    /// Fetch the entries at positions `[offset, offset + limit)` of the ranking.
    ///
    /// An offset past the end yields an empty vector.
    async fn list_entries(&self, offset: u64, limit: u32) -> StorageResult<Vec<LeaderboardEntry>>;

    /// Check that the store is reachable.
    async fn is_healthy(&self) -> bool {
        true
    }
}
