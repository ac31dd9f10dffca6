//! Error types for slice-pager
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for slice-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Items must be an ordered sequence, got {found}")]
    InvalidItemsType { found: String },

    #[error("Invalid page number: {page}")]
    InvalidPage { page: usize },

    #[error("Invalid page size: {size} (must be at least 1)")]
    InvalidPageSize { size: usize },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid items type error
    pub fn invalid_items(found: impl Into<String>) -> Self {
        Self::InvalidItemsType {
            found: found.into(),
        }
    }

    /// Create an invalid page error
    pub fn invalid_page(page: usize) -> Self {
        Self::InvalidPage { page }
    }

    /// Create an invalid page size error
    pub fn invalid_page_size(size: usize) -> Self {
        Self::InvalidPageSize { size }
    }

    /// Create an invalid config value error
    pub fn invalid_config_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is an invalid page error
    pub fn is_invalid_page(&self) -> bool {
        matches!(self, Error::InvalidPage { .. })
    }

    /// Check if this is an invalid items type error
    pub fn is_invalid_items_type(&self) -> bool {
        matches!(self, Error::InvalidItemsType { .. })
    }
}

/// Result type alias for slice-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
