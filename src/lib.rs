//! # slice-pager
//!
//! Generic, in-memory pagination over ordered collections.
//!
//! Given a collection and a page size, a [`Paginator`] extracts the elements
//! of a 1-based page and, on request, the page's metadata: total pages,
//! total count, and whether a next or previous page exists.
//!
//! ## Quick Start
//!
//! ```rust
//! use slice_pager::{Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let items = vec![1, 2, 3, 4, 5];
//!     let mut paginator = Paginator::new(&items).with_page_size(3)?;
//!
//!     let details = paginator.paginate_with_details(1)?;
//!     assert_eq!(details.result, vec![1, 2, 3]);
//!     assert_eq!(details.total_pages, 2);
//!     assert!(details.has_next_page);
//!
//!     Ok(())
//! }
//! ```
//!
//! Untyped input (for example deserialized JSON) goes through
//! [`JsonPaginator`], which rejects anything that is not an array.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Paginators and page metadata
pub mod pagination;

/// Paginator configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PaginatorConfig;
pub use error::{Error, Result};
pub use pagination::{JsonPaginator, PageDetails, Paginator, DEFAULT_PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
