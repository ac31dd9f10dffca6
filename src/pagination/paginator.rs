//! Slice paginator
//!
//! Splits a borrowed slice into fixed-size, 1-based pages.

use super::types::{
    check_page_size, page_bounds, page_count, PageDetails, DEFAULT_PAGE_SIZE,
};
use crate::error::Result;
use std::ops::Range;
use tracing::debug;

/// Paginator over a borrowed, ordered collection
///
/// The collection is never copied as a whole; each call extracts the
/// requested page into a fresh `Vec`.
///
/// ```
/// use slice_pager::Paginator;
///
/// let items = [1, 2, 3, 4, 5];
/// let mut paginator = Paginator::new(&items).with_page_size(3).unwrap();
///
/// assert_eq!(paginator.paginate(2).unwrap(), vec![4, 5]);
/// assert!(paginator.paginate(3).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
    /// Page of the last successful call (0 before any)
    current_page: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// Create a paginator with the default page size
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 0,
        }
    }

    /// Page size must already be known to be non-zero
    pub(crate) fn with_checked_size(items: &'a [T], page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            items,
            page_size,
            current_page: 0,
        }
    }

    /// Set the page size, builder style
    pub fn with_page_size(mut self, size: usize) -> Result<Self> {
        self.set_page_size(size)?;
        Ok(self)
    }

    /// Set the page size
    ///
    /// A size of 0 is rejected and leaves the current size in place.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        self.page_size = check_page_size(size)?;
        Ok(())
    }

    /// Maximum number of elements per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page number of the most recent successful pagination call
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of elements in the collection
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Number of pages at the current page size
    pub fn page_count(&self) -> usize {
        page_count(self.total_count(), self.page_size)
    }

    /// Only meaningful after a successful pagination call
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Only meaningful after a successful pagination call
    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// The underlying collection
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Borrowed view of a page, without recording it as the current page
    pub fn page_slice(&self, page: usize) -> Result<&'a [T]> {
        let Range { start, end } = self.bounds(page)?;
        Ok(&self.items[start..end])
    }

    /// Iterate over every page in order
    ///
    /// Yields nothing for an empty collection.
    pub fn pages(&self) -> std::slice::Chunks<'a, T> {
        self.items.chunks(self.page_size)
    }

    fn bounds(&self, page: usize) -> Result<Range<usize>> {
        page_bounds(page, self.page_size, self.total_count()).inspect_err(|_| {
            debug!(
                "Rejected page {} (page_size={}, total_count={})",
                page,
                self.page_size,
                self.total_count()
            );
        })
    }
}

impl<T: Clone> Paginator<'_, T> {
    /// Copy the elements of a 1-based page
    ///
    /// Page 0 and pages starting past the end of the collection fail with
    /// `Error::InvalidPage`. A page starting exactly at the end is empty.
    pub fn paginate(&mut self, page: usize) -> Result<Vec<T>> {
        let range = self.bounds(page)?;
        debug!(
            "Paginating page {} -> items {}..{} of {}",
            page,
            range.start,
            range.end,
            self.total_count()
        );

        self.current_page = page;
        Ok(self.items[range].to_vec())
    }

    /// Copy a page together with its pagination metadata
    pub fn paginate_with_details(&mut self, page: usize) -> Result<PageDetails<T>> {
        let result = self.paginate(page)?;
        Ok(PageDetails::compute(
            self.current_page,
            self.page_size,
            self.total_count(),
            result,
        ))
    }
}
