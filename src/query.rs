//! Connections over an external, offset-addressable source
//!
//! The engine never talks to a store itself. Callers hand in a query
//! descriptor that knows how to take a [`Window`] plus the function that
//! runs it, and exactly one fetch is issued per call.

use std::future::Future;

use async_graphql::ErrorExtensions;
use async_trait::async_trait;

use crate::args::{
    backward_window, resolve_limit, resolve_offset, Direction, PaginationArgs, Window,
};
use crate::connection::{Connection, SliceOptions};
use crate::PaginationError;

/// Query descriptor that can be restricted to a window (e.g. `LIMIT`/`OFFSET`)
pub trait Paginate {
    fn paginate(self, window: Window) -> Self;
}

impl Paginate for Window {
    fn paginate(self, window: Window) -> Self {
        window
    }
}

/// Page source for callers that model their store as an object
///
/// The source must return items in a stable total order; cursors are only
/// meaningful against that order.
#[async_trait]
pub trait PageSource<T>: Send + Sync
where
    T: Send,
{
    type Error: From<PaginationError> + Send;

    /// Fetch at most `window.limit` items starting at `window.offset`
    async fn fetch_page(&self, window: Window) -> Result<Vec<T>, Self::Error>;
}

/// Options for [`Connection::from_query`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Upper bound on the page size
    pub max: Option<usize>,
    /// Total number of items, needed for `last` without a cursor
    pub count: Option<usize>,
    /// Overrides the derived `has_next_page`
    pub has_next_page: Option<bool>,
    /// Overrides the derived `has_previous_page`
    pub has_previous_page: Option<bool>,
}

fn query_window(
    args: &PaginationArgs,
    opts: &QueryOptions,
) -> crate::Result<(Direction, Window)> {
    let (direction, limit) = resolve_limit(args, opts.max);
    let offset = resolve_offset(args)?;

    let window = match direction {
        Direction::Forward => Window::new(offset.unwrap_or(0), limit),
        Direction::Backward => {
            let end = offset.or(opts.count).ok_or(PaginationError::MissingCount)?;
            backward_window(end, limit)
        }
    };

    Ok((direction, window))
}

impl<T> Connection<T> {
    /// Paginate an external query
    ///
    /// `fetch` receives `query` restricted to the resolved window. A full
    /// page from a `first` request reports `has_next_page`, since more items
    /// may follow. Cursor and count errors are returned before `fetch` runs.
    ///
    /// Resolution errors reach `E` through `From<PaginationError>`, which
    /// for `async_graphql::Error` keeps only the message. GraphQL resolvers
    /// should use [`Connection::from_query_field`] to keep the `code`.
    pub async fn from_query<Q, F, Fut, E>(
        query: Q,
        fetch: F,
        args: &PaginationArgs,
        opts: QueryOptions,
    ) -> Result<Self, E>
    where
        Q: Paginate,
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
        E: From<PaginationError>,
    {
        let resolved = query_window(args, &opts)?;
        Self::fetch_window(query, fetch, resolved, args, &opts).await
    }

    /// Paginate an external query from a GraphQL resolver
    ///
    /// Cursor and count failures become field errors carrying their `code`
    /// extension. Fetch errors are returned as they are.
    pub async fn from_query_field<Q, F, Fut>(
        query: Q,
        fetch: F,
        args: &PaginationArgs,
        opts: QueryOptions,
    ) -> async_graphql::Result<Self>
    where
        Q: Paginate,
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = async_graphql::Result<Vec<T>>>,
    {
        let resolved = query_window(args, &opts).map_err(|e| e.extend())?;
        Self::fetch_window(query, fetch, resolved, args, &opts).await
    }

    /// Paginate a [`PageSource`]
    pub async fn from_source<S>(
        source: &S,
        args: &PaginationArgs,
        opts: QueryOptions,
    ) -> Result<Self, S::Error>
    where
        S: PageSource<T> + ?Sized,
        T: Send,
    {
        Self::from_query(Window::default(), |window| source.fetch_page(window), args, opts).await
    }

    async fn fetch_window<Q, F, Fut, E>(
        query: Q,
        fetch: F,
        (direction, window): (Direction, Window),
        args: &PaginationArgs,
        opts: &QueryOptions,
    ) -> Result<Self, E>
    where
        Q: Paginate,
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        tracing::debug!(
            ?direction,
            offset = window.offset,
            limit = window.limit,
            "fetching page"
        );

        let items = fetch(query.paginate(window)).await?;

        let flags = SliceOptions {
            has_next_page: opts
                .has_next_page
                .unwrap_or(args.first.is_some() && items.len() == window.limit),
            has_previous_page: opts
                .has_previous_page
                .unwrap_or(args.last.is_some() && window.offset > 0),
        };

        Ok(Self::from_slice(items, window.offset, flags))
    }
}
