//! Relay-style connections built from offset slices

use async_graphql::{Object, SimpleObject};
use serde::Serialize;

use crate::cursor::CursorCodec;

/// Page information
#[derive(SimpleObject, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Edge in a connection
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[Object]
impl<T: async_graphql::OutputType> Edge<T> {
    async fn cursor(&self) -> &str {
        &self.cursor
    }

    async fn node(&self) -> &T {
        &self.node
    }
}

/// Connection (paginated result)
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

#[Object]
impl<T: async_graphql::OutputType> Connection<T> {
    async fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    async fn page_info(&self) -> &PageInfo {
        &self.page_info
    }
}

/// Page flags the caller knows about a slice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceOptions {
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl<T> Connection<T> {
    /// Build a connection from items whose first element sits at `offset`
    ///
    /// Each edge's cursor encodes its absolute position, so the slice must
    /// already be in the collection's order.
    pub fn from_slice(
        items: impl IntoIterator<Item = T>,
        offset: usize,
        opts: SliceOptions,
    ) -> Self {
        let edges: Vec<Edge<T>> = items
            .into_iter()
            .enumerate()
            .map(|(idx, node)| Edge {
                cursor: CursorCodec::encode(offset.saturating_add(idx)),
                node,
            })
            .collect();

        let start_cursor = edges.first().map(|e| e.cursor.clone());
        let end_cursor = edges.last().map(|e| e.cursor.clone());

        Self {
            edges,
            page_info: PageInfo {
                has_next_page: opts.has_next_page,
                has_previous_page: opts.has_previous_page,
                start_cursor,
                end_cursor,
            },
        }
    }

    /// Create empty connection
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }

    /// Nodes of the page, in edge order
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    /// Convert every node, keeping cursors and page info
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|e| Edge {
                    cursor: e.cursor,
                    node: f(e.node),
                })
                .collect(),
            page_info: self.page_info,
        }
    }
}
