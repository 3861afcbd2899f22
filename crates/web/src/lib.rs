//! Web surface for the Podium leaderboard.
//!
//! - `GET /` serves the page shell, which fetches fragments as the user
//!   navigates.
//! - `GET /leaderboard?pageNumber=N` serves one page as an HTML fragment
//!   (results table plus pagination controls).
//! - `POST /graphql` serves the same pages as data.
//! - `GET /health` reports whether the store is reachable.
//!
//! # Usage
//!
//! ```ignore
//! use podium_web::{AppState, ServerConfig, serve_with_shutdown};
//!
//! let state = AppState::new(service);
//! serve_with_shutdown(state, ServerConfig::default(), shutdown_signal).await?;
//! ```

pub mod error;
pub mod render;
mod schema;
mod server;

pub use error::AppError;
pub use schema::{
    LeaderboardPage, LeaderboardQuery, LeaderboardSchema, MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH,
    RankedEntry, build_schema,
};
pub use server::{AppState, PageParams, ServerConfig, router, serve_with_shutdown};
