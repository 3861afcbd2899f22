//! Core domain layer for the Podium leaderboard.
//!
//! This crate contains the domain models, port traits (interfaces), and
//! services for the block producer uptime leaderboard. It is the innermost
//! layer and has no dependencies on infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      podium (binary)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │        podium-web          │         podium-storage         │
//! │   (HTML, GraphQL, HTTP)    │          (PostgreSQL)          │
//! ├────────────────────────────┴────────────────────────────────┤
//! │                     podium-core  ← YOU ARE HERE             │
//! │               (models, ports, services)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`models`] - Domain models (LeaderboardEntry, PageRequest, PageResult)
//! - [`ports`] - Storage port and pagination arithmetic
//! - [`services`] - Page retrieval (LeaderboardService)
//! - [`error`] - Domain error types
//! - [`metrics`] - Prometheus metrics definitions
//!
//! # Page Retrieval
//!
//! 1. Parse and normalize the requested page number
//! 2. Compute the row offset from the page number and the fixed page size
//! 3. Count all entries
//! 4. Fetch the ordered slice `[offset, offset + page_size)`
//! 5. Derive the page count from the total

pub mod error;
pub mod metrics;
pub mod models;
pub mod ports;
pub mod services;
