//! Connections over a fully materialized list

use crate::args::PaginationArgs;
use crate::connection::{Connection, SliceOptions};

/// Options for [`Connection::from_list`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Upper bound on the page size, whatever the client asks for
    pub max: Option<usize>,
}

impl<T> Connection<T> {
    /// Paginate an entire ordered collection
    ///
    /// `has_next_page` is only ever reported for `first` requests and
    /// `has_previous_page` only for `last` requests, as Relay prescribes.
    pub fn from_list(
        items: Vec<T>,
        args: &PaginationArgs,
        opts: ListOptions,
    ) -> crate::Result<Self> {
        let count = items.len();
        let (direction, window) = args.window(count, opts.max)?;

        tracing::debug!(
            ?direction,
            offset = window.offset,
            limit = window.limit,
            count,
            "paginating list"
        );

        let flags = SliceOptions {
            has_next_page: args.first.is_some() && count > window.end(),
            has_previous_page: args.last.is_some() && window.offset > 0,
        };

        let page = items.into_iter().skip(window.offset).take(window.limit);
        Ok(Self::from_slice(page, window.offset, flags))
    }
}
