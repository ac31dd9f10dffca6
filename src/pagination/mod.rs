//! Pagination module
//!
//! Splits an ordered collection into 1-based, fixed-size pages.
//!
//! # Overview
//!
//! [`Paginator`] borrows a typed slice and copies out one page per call,
//! optionally with [`PageDetails`] metadata (total pages, total count,
//! next/previous availability). [`JsonPaginator`] does the same for
//! untyped JSON input, rejecting anything that is not an array.

mod dynamic;
mod paginator;
mod types;

pub use dynamic::JsonPaginator;
pub use paginator::Paginator;
pub use types::{page_bounds, page_count, PageDetails, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
