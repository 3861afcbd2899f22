//! Leaderboard page retrieval.
//!
//! Each call is independent: the service keeps no per-request state and
//! caches nothing, so concurrent requests never coordinate.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::error::{DomainResult, StorageError};
use crate::metrics::{QueryTimer, record_out_of_range_page, record_storage_error};
use crate::models::{PageRequest, PageResult};
use crate::ports::{DEFAULT_PAGE_SIZE, LeaderboardRepository, validate_page_size};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the leaderboard service.
#[derive(Debug, Clone)]
pub struct LeaderboardConfig {
    /// Rows per page. Fixed for the lifetime of the service.
    pub page_size: u32,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// =============================================================================
// LeaderboardService
// =============================================================================

/// Serves pages of the ranked leaderboard.
///
/// # Flow
///
/// 1. Normalize the page number (0 becomes 1)
/// 2. Compute the row offset
/// 3. Count all entries
/// 4. Fetch the slice at the offset
///
/// A page past the last one is not an error: its slice is empty.
#[derive(Clone)]
pub struct LeaderboardService {
    repository: Arc<dyn LeaderboardRepository>,
    page_size: u32,
}

impl LeaderboardService {
    /// Create a service over the given store.
    ///
    /// Fails if the configured page size is out of range.
    pub fn new(
        config: LeaderboardConfig,
        repository: Arc<dyn LeaderboardRepository>,
    ) -> DomainResult<Self> {
        let page_size = validate_page_size(config.page_size)?;
        Ok(Self {
            repository,
            page_size,
        })
    }

    /// Rows per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Build a request for the given 1-based page with this service's page size.
    pub fn request(&self, page_number: u64) -> PageRequest {
        PageRequest::new(page_number, self.page_size)
    }

    /// Fetch one page of the leaderboard.
    #[instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn get_page(&self, page_number: u64) -> DomainResult<PageResult> {
        let request = self.request(page_number);
        let _timer = QueryTimer::new();

        let total_count = self
            .repository
            .count_entries()
            .await
            .inspect_err(log_storage_error)?;

        let entries = match request.offset() {
            Some(offset) if offset < total_count => self
                .repository
                .list_entries(offset, request.page_size)
                .await
                .inspect_err(log_storage_error)?,
            _ => Vec::new(),
        };

        let page = PageResult::new(request, total_count, entries);

        if page.is_out_of_range() {
            record_out_of_range_page();
            debug!(
                page = page.page_number,
                page_count = page.page_count,
                "Requested page is past the last page"
            );
        }

        debug!(
            page = page.page_number,
            rows = page.entries.len(),
            total = page.total_count,
            "Leaderboard page fetched"
        );

        Ok(page)
    }

    /// Check that the underlying store is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.repository.is_healthy().await
    }
}

fn log_storage_error(err: &StorageError) {
    record_storage_error(err.kind());
    warn!(error = %err, "Leaderboard query failed");
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::{DomainError, StorageResult};
    use crate::models::LeaderboardEntry;
    use crate::ports::{InMemoryLeaderboard, MAX_PAGE_SIZE, rows_on_page};

    fn board(n: usize) -> Arc<InMemoryLeaderboard> {
        let entries = (0..n)
            .map(|i| LeaderboardEntry::new(format!("B62q{i:04}"), (i % 17) as f64))
            .collect();
        Arc::new(InMemoryLeaderboard::new(entries))
    }

    fn service(n: usize, page_size: u32) -> LeaderboardService {
        LeaderboardService::new(LeaderboardConfig { page_size }, board(n)).unwrap()
    }

    struct DownRepository;

    #[async_trait]
    impl LeaderboardRepository for DownRepository {
        async fn count_entries(&self) -> StorageResult<u64> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
        async fn list_entries(&self, _: u64, _: u32) -> StorageResult<Vec<LeaderboardEntry>> {
            Err(StorageError::Unavailable("connection refused".into()))
        }
        async fn is_healthy(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_rejects_invalid_page_size() {
        for page_size in [0, MAX_PAGE_SIZE + 1] {
            let result = LeaderboardService::new(LeaderboardConfig { page_size }, board(1));
            assert!(matches!(result, Err(DomainError::InvalidPageSize { .. })));
        }
    }

    // Exemple de référence: 45 entrées, 20 par page
    #[tokio::test]
    async fn test_forty_five_entries_make_three_pages() {
        let svc = service(45, 20);

        let first = svc.get_page(1).await.unwrap();
        assert_eq!(first.page_count, 3);
        assert_eq!(first.total_count, 45);
        assert_eq!(first.entries.len(), 20);
        let ranks: Vec<u64> = first.ranked().map(|(rank, _)| rank).collect();
        assert_eq!(ranks, (1..=20).collect::<Vec<_>>());

        let last = svc.get_page(3).await.unwrap();
        assert_eq!(last.entries.len(), 5);
        let ranks: Vec<u64> = last.ranked().map(|(rank, _)| rank).collect();
        assert_eq!(ranks, (41..=45).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_slice_lengths_for_every_page() {
        for (total, page_size) in [(0usize, 20u32), (1, 20), (20, 20), (45, 20), (101, 7)] {
            let svc = service(total, page_size);
            let page_count = svc.get_page(1).await.unwrap().page_count;
            for n in 1..=page_count {
                let page = svc.get_page(n).await.unwrap();
                assert_eq!(
                    page.entries.len() as u64,
                    rows_on_page(total as u64, n, page_size),
                    "total={total} page={n}"
                );
            }
        }
    }

    // Test critique: l'ordre décroissant tient à l'intérieur et entre les pages
    #[tokio::test]
    async fn test_scores_descend_within_and_across_pages() {
        let svc = service(60, 7);
        let mut previous_last: Option<f64> = None;

        for n in 1..=svc.get_page(1).await.unwrap().page_count {
            let page = svc.get_page(n).await.unwrap();
            assert!(page.entries.windows(2).all(|w| w[0].score >= w[1].score));
            if let (Some(last), Some(first)) = (previous_last, page.entries.first()) {
                assert!(last >= first.score);
            }
            previous_last = page.entries.last().map(|e| e.score);
        }
    }

    #[tokio::test]
    async fn test_page_zero_is_first_page() {
        let svc = service(45, 20);
        let page = svc.get_page(0).await.unwrap();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.entries.len(), 20);
    }

    // Comportement permissif: une page au-delà de la fin est vide, pas une erreur
    #[tokio::test]
    async fn test_page_past_end_is_empty() {
        let svc = service(45, 20);
        let page = svc.get_page(9).await.unwrap();
        assert!(page.entries.is_empty());
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total_count, 45);

        let huge = svc.get_page(u64::MAX).await.unwrap();
        assert!(huge.entries.is_empty());
    }

    #[tokio::test]
    async fn test_empty_leaderboard_has_zero_pages() {
        let svc = service(0, 20);
        let page = svc.get_page(1).await.unwrap();
        assert_eq!(page.page_count, 0);
        assert_eq!(page.total_count, 0);
        assert!(page.entries.is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let svc = LeaderboardService::new(LeaderboardConfig::default(), Arc::new(DownRepository))
            .unwrap();

        let err = svc.get_page(1).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Storage(StorageError::Unavailable(_))
        ));
        assert!(!svc.is_healthy().await);
    }
}
