//! Paginator configuration
//!
//! Loaded from YAML or JSON, for example:
//!
//! ```yaml
//! page_size: 25
//! start_page: 1
//! ```

use crate::error::{Error, Result};
use crate::pagination::{Paginator, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Paginator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    /// Maximum number of elements per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Page requested when the caller does not name one
    #[serde(default = "default_start_page")]
    pub start_page: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_start_page() -> usize {
    1
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            start_page: default_start_page(),
        }
    }
}

impl PaginatorConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_config_value(
                "page_size",
                "must be at least 1",
            ));
        }
        if self.start_page == 0 {
            return Err(Error::invalid_config_value(
                "start_page",
                "pages are numbered from 1",
            ));
        }
        Ok(())
    }

    /// Apply these settings to a paginator
    pub fn apply<T>(&self, paginator: &mut Paginator<'_, T>) -> Result<()> {
        paginator.set_page_size(self.page_size)
    }
}
