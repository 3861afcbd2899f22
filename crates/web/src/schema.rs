//! GraphQL schema definition.
//!
//! Exposes the same pages as the HTML fragment route, as data.

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};

use podium_core::metrics::record_page_served;
use podium_core::models::PageResult;
use podium_core::ports::normalize_page_number;
use podium_core::services::LeaderboardService;

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth to prevent deeply nested queries (DoS protection).
/// Note: GraphQL introspection requires depth ~13, so we use 15 to allow it.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
pub const MAX_QUERY_COMPLEXITY: usize = 500;

/// The leaderboard GraphQL schema type.
pub type LeaderboardSchema = Schema<LeaderboardQuery, EmptyMutation, EmptySubscription>;

/// Build the schema over a leaderboard service.
pub fn build_schema(service: LeaderboardService) -> LeaderboardSchema {
    Schema::build(LeaderboardQuery, EmptyMutation, EmptySubscription)
        .data(service)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
        .finish()
}

// -----------------------------------------------------------------------------
// Query
// -----------------------------------------------------------------------------

#[derive(Default)]
pub struct LeaderboardQuery;

#[Object]
impl LeaderboardQuery {
    /// Get one page of the leaderboard, ranked by score descending.
    ///
    /// A missing or non-positive page number selects the first page. A page
    /// past the last one has no entries.
    async fn leaderboard<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        page_number: Option<i64>,
    ) -> Result<LeaderboardPage> {
        let service = ctx.data::<LeaderboardService>()?;

        let page = service
            .get_page(normalize_page_number(page_number))
            .await?;

        record_page_served("graphql");
        Ok(LeaderboardPage::from(page))
    }

    /// Rows per page.
    async fn page_size<'ctx>(&self, ctx: &Context<'ctx>) -> Result<u32> {
        Ok(ctx.data::<LeaderboardService>()?.page_size())
    }
}

// -----------------------------------------------------------------------------
// GraphQL Types
// -----------------------------------------------------------------------------

/// A leaderboard row with its overall rank.
#[derive(async_graphql::SimpleObject)]
pub struct RankedEntry {
    pub rank: u64,
    pub public_key: String,
    pub score: f64,
}

/// One page of the leaderboard.
#[derive(async_graphql::SimpleObject)]
pub struct LeaderboardPage {
    pub entries: Vec<RankedEntry>,
    pub total_count: u64,
    pub page_number: u64,
    pub page_size: u32,
    pub page_count: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl From<PageResult> for LeaderboardPage {
    fn from(page: PageResult) -> Self {
        let entries = page
            .ranked()
            .map(|(rank, entry)| RankedEntry {
                rank,
                public_key: entry.public_key.clone(),
                score: entry.score,
            })
            .collect();

        Self {
            entries,
            total_count: page.total_count,
            page_number: page.page_number,
            page_size: page.page_size,
            page_count: page.page_count,
            has_previous_page: page.has_previous(),
            has_next_page: page.has_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use podium_core::models::LeaderboardEntry;
    use podium_core::ports::InMemoryLeaderboard;
    use podium_core::services::LeaderboardConfig;

    fn schema(n: usize) -> LeaderboardSchema {
        let entries = (0..n)
            .map(|i| LeaderboardEntry::new(format!("B62q{i:03}"), (1000 - i) as f64))
            .collect();
        let service = LeaderboardService::new(
            LeaderboardConfig::default(),
            Arc::new(InMemoryLeaderboard::new(entries)),
        )
        .unwrap();
        build_schema(service)
    }

    #[tokio::test]
    async fn test_leaderboard_query_returns_ranked_page() {
        let response = schema(45)
            .execute("{ leaderboard(pageNumber: 2) { pageCount totalCount hasNextPage entries { rank publicKey score } } }")
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        let page = &data["leaderboard"];
        assert_eq!(page["pageCount"], 3);
        assert_eq!(page["totalCount"], 45);
        assert_eq!(page["hasNextPage"], true);
        assert_eq!(page["entries"][0]["rank"], 21);
        assert_eq!(page["entries"][0]["publicKey"], "B62q020");
        assert_eq!(page["entries"].as_array().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_missing_or_negative_page_number_is_first_page() {
        for query in [
            "{ leaderboard { pageNumber } }",
            "{ leaderboard(pageNumber: -3) { pageNumber } }",
        ] {
            let response = schema(5).execute(query).await;
            let data = response.data.into_json().unwrap();
            assert_eq!(data["leaderboard"]["pageNumber"], 1);
        }
    }

    #[tokio::test]
    async fn test_page_size_query() {
        let response = schema(0).execute("{ pageSize }").await;
        let data = response.data.into_json().unwrap();
        assert_eq!(data["pageSize"], 20);
    }
}
