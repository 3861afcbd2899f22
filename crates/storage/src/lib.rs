//! Storage layer for the Podium leaderboard.
//!
//! This crate provides the PostgreSQL implementation of the
//! `LeaderboardRepository` port defined in `podium-core`. It handles
//! connection pooling and the two read queries behind every page.
//!
//! The `node_record_table` is owned by the scoring pipeline; this crate
//! only reads from it.
//!
//! # Usage
//!
//! ```ignore
//! use podium_storage::{Database, DatabaseConfig, PgLeaderboardRepository};
//!
//! let config = DatabaseConfig::for_web(&database_url);
//! let db = Database::connect_lazy(&config)?;
//!
//! let repository = Arc::new(PgLeaderboardRepository::new(&db));
//! ```

pub mod postgres;

pub use postgres::{Database, DatabaseConfig, PgLeaderboardRepository};
