//! CLI module
//!
//! Command-line interface for paginating JSON arrays.
//!
//! # Commands
//!
//! - `page` - Print the elements of one page
//! - `details` - Print one page with its pagination metadata
//! - `summary` - Print collection totals
//! - `all` - Print every page with metadata, one per line

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{render, Runner};
