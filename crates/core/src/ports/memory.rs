//! In-memory leaderboard store for tests (`test-util` feature).

use std::cmp::Ordering;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::models::LeaderboardEntry;

use super::repository::LeaderboardRepository;

/// A fixed snapshot of entries kept in ranking order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl InMemoryLeaderboard {
    /// Build a snapshot, sorting by score descending then public key.
    pub fn new(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(ranking_order);
        Self { entries }
    }
}

/// Score descending, then public key ascending by bytes (SQL `COLLATE "C"`).
pub fn ranking_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.public_key.cmp(&b.public_key))
}

#[async_trait]
impl LeaderboardRepository for InMemoryLeaderboard {
    async fn count_entries(&self) -> StorageResult<u64> {
        Ok(self.entries.len() as u64)
    }

    async fn list_entries(&self, offset: u64, limit: u32) -> StorageResult<Vec<LeaderboardEntry>> {
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        Ok(self
            .entries
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_is_ranked() {
        let store = InMemoryLeaderboard::new(vec![
            LeaderboardEntry::new("B62qb", 10.0),
            LeaderboardEntry::new("B62qc", 30.0),
            LeaderboardEntry::new("B62qa", 10.0),
        ]);

        let keys: Vec<String> = store
            .list_entries(0, 10)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.public_key)
            .collect();

        // Égalité de score départagée par la clé publique
        assert_eq!(keys, vec!["B62qc", "B62qa", "B62qb"]);
    }

    // Départage octet par octet: majuscules avant minuscules, comme COLLATE "C"
    #[test]
    fn test_tie_break_compares_bytes() {
        let upper = LeaderboardEntry::new("B62qZ", 5.0);
        let lower = LeaderboardEntry::new("B62qa", 5.0);
        assert_eq!(ranking_order(&upper, &lower), Ordering::Less);
        assert_eq!(
            ranking_order(&lower, &LeaderboardEntry::new("B62qz", 6.0)),
            Ordering::Greater
        );
    }

    #[tokio::test]
    async fn test_slice_past_end_is_empty() {
        let store = InMemoryLeaderboard::new(vec![LeaderboardEntry::new("B62qa", 1.0)]);
        assert!(store.list_entries(5, 20).await.unwrap().is_empty());
        assert_eq!(store.count_entries().await.unwrap(), 1);
    }
}
