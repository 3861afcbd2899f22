//! Metrics definitions for the leaderboard.
//!
//! This module defines all metrics used throughout the service.
//! Metrics are collected using the `metrics` crate and can be exported
//! to Prometheus via `metrics-exporter-prometheus`.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Instant;

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!(
        "leaderboard_pages_served_total",
        "Total number of leaderboard pages served"
    );
    describe_counter!(
        "leaderboard_out_of_range_pages_total",
        "Total number of pages requested past the last page"
    );
    describe_counter!(
        "leaderboard_storage_errors_total",
        "Total number of storage errors while reading the leaderboard"
    );
    describe_histogram!(
        "leaderboard_query_duration_seconds",
        "Time taken to count and fetch one leaderboard page in seconds"
    );
}

/// Record a page served to a client.
///
/// # Arguments
/// * `surface` - Where the page was served ("html" or "graphql")
pub fn record_page_served(surface: &str) {
    counter!("leaderboard_pages_served_total", "surface" => surface.to_string()).increment(1);
}

/// Record a request for a page past the last page.
pub fn record_out_of_range_page() {
    counter!("leaderboard_out_of_range_pages_total").increment(1);
}

/// Record a storage error.
///
/// # Arguments
/// * `kind` - Error kind, see [`crate::error::StorageError::kind`]
pub fn record_storage_error(kind: &str) {
    counter!("leaderboard_storage_errors_total", "kind" => kind.to_string()).increment(1);
}

/// Record page query duration.
pub fn record_query_duration(duration_secs: f64) {
    histogram!("leaderboard_query_duration_seconds").record(duration_secs);
}

/// A timer that automatically records query duration when dropped.
pub struct QueryTimer {
    start: Instant,
}

impl QueryTimer {
    /// Start a new query timer.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for QueryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for QueryTimer {
    fn drop(&mut self) {
        record_query_duration(self.start.elapsed().as_secs_f64());
    }
}
