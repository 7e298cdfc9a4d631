//! # relay-offset-pagination
//!
//! Relay-style cursor connection pagination for offset-addressed data.
//!
//! ## Features
//!
//! - **Cursor Codec** - opaque `arrayconnection:`-tagged base64 cursors
//! - **Argument Resolution** - `first`/`after`/`last`/`before` to offset and limit
//! - **Connections** - edges and page info from a slice, a full list, or an external query
//! - **GraphQL** - `async-graphql` objects, input type and error extensions
//!
//! ## Usage
//!
//! ```rust
//! use relay_offset_pagination::{Connection, ListOptions, PaginationArgs};
//!
//! let args = PaginationArgs { first: Some(2), ..Default::default() };
//! let items = vec!["a", "b", "c"];
//! let connection = Connection::from_list(items, &args, ListOptions::default())?;
//!
//! assert_eq!(connection.nodes().collect::<Vec<_>>(), vec![&"a", &"b"]);
//! assert!(connection.page_info.has_next_page);
//! # Ok::<(), relay_offset_pagination::PaginationError>(())
//! ```

pub mod args;
pub mod config;
pub mod connection;
pub mod cursor;
pub mod list;
pub mod query;

pub use args::{resolve_limit, resolve_offset, Direction, PaginationArgs, Window};
pub use config::PaginationConfig;
pub use connection::{Connection, Edge, PageInfo, SliceOptions};
pub use cursor::{CursorCodec, CURSOR_PREFIX};
pub use list::ListOptions;
pub use query::{PageSource, Paginate, QueryOptions};

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Pagination errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// The cursor did not decode to an offset minted by [`CursorCodec`].
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    /// Backward paging over an external source needs a `before` cursor or a total count.
    #[error("Missing count: backward pagination needs a `before` cursor or a `count` option")]
    MissingCount,
}

impl PaginationError {
    /// Stable machine-readable code, exposed as the `code` GraphQL error extension.
    pub fn code(&self) -> &'static str {
        match self {
            PaginationError::InvalidCursor(_) => "INVALID_CURSOR",
            PaginationError::MissingCount => "MISSING_COUNT",
        }
    }
}

impl ErrorExtensions for PaginationError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("code", self.code().to_string()))
    }
}

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginationError>;
