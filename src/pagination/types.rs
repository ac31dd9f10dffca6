//! Pagination types and page arithmetic
//!
//! Everything here is a pure function of `(page, page_size, total_count)`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// A page of results bundled with its pagination metadata
///
/// Field names are stable for serialization:
/// `current_page, total_pages, total_count, page_size, has_next_page,
/// has_prev_page, result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDetails<T> {
    /// 1-based page number this result belongs to
    pub current_page: usize,
    /// Number of pages in the collection (0 for an empty collection)
    pub total_pages: usize,
    /// Number of elements in the whole collection
    pub total_count: usize,
    /// Maximum number of elements per page
    pub page_size: usize,
    /// True when `current_page < total_pages`
    pub has_next_page: bool,
    /// True when `current_page > 1`
    pub has_prev_page: bool,
    /// Elements of this page, in collection order
    pub result: Vec<T>,
}

impl<T> PageDetails<T> {
    /// Derive page metadata from explicit inputs
    pub fn compute(page: usize, page_size: usize, total_count: usize, result: Vec<T>) -> Self {
        let total_pages = page_count(total_count, page_size);
        Self {
            current_page: page,
            total_pages,
            total_count,
            page_size,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
            result,
        }
    }

    /// Number of elements on this page
    pub fn len(&self) -> usize {
        self.result.len()
    }

    /// True when this page holds no elements
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Convert the page elements, keeping the metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageDetails<U> {
        PageDetails {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_count: self.total_count,
            page_size: self.page_size,
            has_next_page: self.has_next_page,
            has_prev_page: self.has_prev_page,
            result: self.result.into_iter().map(f).collect(),
        }
    }
}

/// Ceiling of `total_count / page_size`
///
/// Returns 0 for an empty collection, and for a zero page size.
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Reject a page size of 0
pub(crate) fn check_page_size(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(Error::invalid_page_size(size));
    }
    Ok(size)
}

/// Index range `[start, end)` covered by a 1-based page
///
/// A page starting exactly at `total_count` is valid and empty. A page
/// starting beyond it, or page 0, is `Error::InvalidPage`.
pub fn page_bounds(page: usize, page_size: usize, total_count: usize) -> Result<Range<usize>> {
    check_page_size(page_size)?;
    if page < 1 {
        return Err(Error::invalid_page(page));
    }

    let start = (page - 1)
        .checked_mul(page_size)
        .ok_or_else(|| Error::invalid_page(page))?;
    if start > total_count {
        return Err(Error::invalid_page(page));
    }

    // Clamp the last page to the collection length
    let end = start + page_size.min(total_count - start);
    Ok(start..end)
}
