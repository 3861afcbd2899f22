//! PostgreSQL storage adapter.
//!
//! - [`Database`] - Connection pool
//! - [`PgLeaderboardRepository`] - Ranked reads over `node_record_table`

mod database;
mod helpers;
mod leaderboard_repo;

pub use database::{Database, DatabaseConfig};
pub use leaderboard_repo::PgLeaderboardRepository;
