//! Domain models for the leaderboard.

use crate::ports::{first_rank, page_count};

/// One block producer's row on the leaderboard.
///
/// Entries are read-only snapshots of externally owned data.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// Block producer public key.
    pub public_key: String,
    /// Uptime performance score. Higher ranks first.
    pub score: f64,
}

impl LeaderboardEntry {
    pub fn new(public_key: impl Into<String>, score: f64) -> Self {
        Self {
            public_key: public_key.into(),
            score,
        }
    }
}

/// A request for one page of the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page_number: u64,
    /// Rows per page.
    pub page_size: u32,
}

impl PageRequest {
    /// Build a request, normalizing a page number of 0 to the first page.
    pub fn new(page_number: u64, page_size: u32) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size,
        }
    }

    /// Row offset of the first entry on this page.
    ///
    /// Returns `None` when the offset does not fit a signed 64-bit integer,
    /// which no store can serve.
    pub fn offset(&self) -> Option<u64> {
        self.page_number
            .saturating_sub(1)
            .checked_mul(u64::from(self.page_size))
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}

/// One page of the leaderboard plus the metadata needed to paginate.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// Entries on this page, score descending.
    pub entries: Vec<LeaderboardEntry>,
    /// Number of entries across all pages.
    pub total_count: u64,
    /// 1-based page number that was requested.
    pub page_number: u64,
    /// Rows per page.
    pub page_size: u32,
    /// `ceil(total_count / page_size)`, 0 for an empty leaderboard.
    pub page_count: u64,
}

impl PageResult {
    pub fn new(request: PageRequest, total_count: u64, entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries,
            total_count,
            page_number: request.page_number,
            page_size: request.page_size,
            page_count: page_count(total_count, request.page_size),
        }
    }

    /// Iterate entries together with their overall rank.
    pub fn ranked(&self) -> impl Iterator<Item = (u64, &LeaderboardEntry)> {
        let first = first_rank(self.page_number, self.page_size);
        self.entries
            .iter()
            .enumerate()
            .map(move |(index, entry)| (first.saturating_add(index as u64), entry))
    }

    /// Whether a page exists before this one.
    pub fn has_previous(&self) -> bool {
        self.page_number > 1 && self.page_count > 1
    }

    /// Whether a page exists after this one.
    pub fn has_next(&self) -> bool {
        self.page_number < self.page_count
    }

    /// Whether the requested page lies past the last page.
    pub fn is_out_of_range(&self) -> bool {
        self.page_number > self.page_count.max(1)
    }
}
