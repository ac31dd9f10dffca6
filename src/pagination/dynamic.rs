//! Pagination over untyped JSON input
//!
//! Typed callers get sequence checking from `Paginator<T>` at compile time.
//! Deserialized data only knows its shape at runtime, so the array check
//! happens here, at construction.

use super::paginator::Paginator;
use super::types::{check_page_size, page_count, PageDetails, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use serde_json::Value;

/// Paginator over a JSON array
#[derive(Debug, Clone)]
pub struct JsonPaginator {
    items: Vec<Value>,
    page_size: usize,
    current_page: usize,
}

impl JsonPaginator {
    /// Wrap a JSON value, which must be an array
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self {
                items,
                page_size: DEFAULT_PAGE_SIZE,
                current_page: 0,
            }),
            other => Err(Error::invalid_items(json_kind(&other))),
        }
    }

    /// Parse JSON text, then wrap it
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Set the page size (0 is rejected)
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

    /// Number of elements in the array
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Number of pages at the current page size
    pub fn page_count(&self) -> usize {
        page_count(self.items.len(), self.page_size)
    }

    /// Typed paginator borrowing the array elements
    pub fn as_paginator(&self) -> Paginator<'_, Value> {
        Paginator::with_checked_size(&self.items, self.page_size)
    }

    /// Copy the elements of a 1-based page
    pub fn paginate(&mut self, page: usize) -> Result<Vec<Value>> {
        let result = self.as_paginator().paginate(page)?;
        self.current_page = page;
        Ok(result)
    }

    /// Copy a page together with its pagination metadata
    pub fn paginate_with_details(&mut self, page: usize) -> Result<PageDetails<Value>> {
        let details = self.as_paginator().paginate_with_details(page)?;
        self.current_page = details.current_page;
        Ok(details)
    }
}

/// Name of a JSON value's kind, for error messages
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
