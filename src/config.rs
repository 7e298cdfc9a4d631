//! Operator configuration for page sizes

use serde::Deserialize;

use crate::list::ListOptions;
use crate::query::QueryOptions;

/// Largest page served unless configured otherwise
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Pagination settings loaded from the service's configuration file
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationConfig {
    /// Upper bound on `first`/`last`; `None` disables the bound
    pub max_page_size: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_page_size: Some(DEFAULT_MAX_PAGE_SIZE),
        }
    }
}

impl PaginationConfig {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            max: self.max_page_size,
        }
    }

    /// Query options with the configured bound and no known count
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            max: self.max_page_size,
            ..Default::default()
        }
    }
}
