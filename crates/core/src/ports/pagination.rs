//! Offset pagination arithmetic for the leaderboard.
//!
//! Pages are 1-based. A page is the slice `[offset, offset + page_size)` of
//! the full ranking, where `offset = (page_number - 1) * page_size`.

use std::num::IntErrorKind;

use crate::error::{DomainError, DomainResult};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Number of pages needed to show `total_count` entries.
///
/// Returns 0 for an empty leaderboard.
pub fn page_count(total_count: u64, page_size: u32) -> u64 {
    total_count.div_ceil(u64::from(page_size.max(1)))
}

/// Overall rank of the first row on a page.
pub fn first_rank(page_number: u64, page_size: u32) -> u64 {
    page_number
        .max(1)
        .saturating_sub(1)
        .saturating_mul(u64::from(page_size))
        .saturating_add(1)
}

/// Expected number of rows on a page.
pub fn rows_on_page(total_count: u64, page_number: u64, page_size: u32) -> u64 {
    let skipped = page_number
        .max(1)
        .saturating_sub(1)
        .saturating_mul(u64::from(page_size));
    total_count.saturating_sub(skipped).min(u64::from(page_size))
}

/// Parse a raw page-number parameter.
///
/// Missing, blank, zero and negative values select the first page.
/// Integers too large to represent select a page past the last one.
/// Anything that is not an integer is rejected.
pub fn parse_page_number(raw: Option<&str>) -> DomainResult<u64> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(1);
    };

    match value.parse::<i64>() {
        Ok(number) => Ok(normalize_page_number(Some(number))),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(u64::MAX),
            IntErrorKind::NegOverflow => Ok(1),
            _ => Err(DomainError::InvalidPageNumber(value.to_string())),
        },
    }
}

/// Normalize an already-typed page number: absent or `<= 0` becomes 1.
pub fn normalize_page_number(page_number: Option<i64>) -> u64 {
    match page_number {
        Some(n) if n > 0 => n as u64,
        _ => 1,
    }
}

/// Validate a configured page size.
pub fn validate_page_size(page_size: u32) -> DomainResult<u32> {
    if (1..=MAX_PAGE_SIZE).contains(&page_size) {
        Ok(page_size)
    } else {
        Err(DomainError::InvalidPageSize {
            size: page_size,
            max: MAX_PAGE_SIZE,
        })
    }
}
