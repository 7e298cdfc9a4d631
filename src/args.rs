//! Pagination argument resolution
//!
//! Turns Relay connection arguments into an absolute offset and a limit.

use async_graphql::InputObject;
use serde::{Deserialize, Serialize};

use crate::cursor::CursorCodec;

/// Pagination arguments for GraphQL queries
///
/// Follows the Relay Cursor Connections Specification:
/// https://relay.dev/graphql/connections.htm
///
/// `first` wins when both `first` and `last` are set. When neither is set
/// the page is empty: the resolved limit is `0`, not "everything".
#[derive(InputObject, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationArgs {
    /// Number of items to return (forward pagination)
    pub first: Option<usize>,

    /// Return items after this cursor
    pub after: Option<String>,

    /// Number of items to return (backward pagination)
    pub last: Option<usize>,

    /// Return items before this cursor
    pub before: Option<String>,
}

/// Paging direction chosen from `first`/`last`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Resolved absolute window into the ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Window {
    /// Absolute offset of the first item in the page
    pub offset: usize,
    /// Number of items the page may hold
    pub limit: usize,
}

impl Window {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Offset one past the last item of the window
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }
}

/// Resolve the paging direction and limit, clamped to `max` when given
pub fn resolve_limit(args: &PaginationArgs, max: Option<usize>) -> (Direction, usize) {
    let (direction, limit) = match (args.first, args.last) {
        (Some(first), _) => (Direction::Forward, first),
        (None, Some(last)) => (Direction::Backward, last),
        (None, None) => (Direction::Forward, 0),
    };

    match max {
        Some(max) => (direction, limit.min(max)),
        None => (direction, limit),
    }
}

/// Resolve the offset named by the `after` or `before` cursor
///
/// `after` points one past the referenced item, `before` at it. Returns
/// `None` when neither cursor is present.
pub fn resolve_offset(args: &PaginationArgs) -> crate::Result<Option<usize>> {
    if let Some(after) = &args.after {
        return Ok(Some(CursorCodec::decode(after)?.saturating_add(1)));
    }

    if let Some(before) = &args.before {
        return Ok(Some(CursorCodec::decode(before)?));
    }

    Ok(None)
}

impl PaginationArgs {
    /// Forward pagination arguments
    pub fn first(first: usize) -> Self {
        Self {
            first: Some(first),
            ..Default::default()
        }
    }

    /// Backward pagination arguments
    pub fn last(last: usize) -> Self {
        Self {
            last: Some(last),
            ..Default::default()
        }
    }

    /// Resolve direction and window over a materialized collection of `count` items
    ///
    /// Backward windows end at the resolved offset (or `count`). When the
    /// start clamps to zero the limit becomes that end offset, so the page
    /// holds everything before it.
    pub fn window(&self, count: usize, max: Option<usize>) -> crate::Result<(Direction, Window)> {
        let (direction, limit) = resolve_limit(self, max);
        let offset = resolve_offset(self)?;

        let window = match direction {
            Direction::Forward => Window::new(offset.unwrap_or(0), limit),
            Direction::Backward => backward_window(offset.unwrap_or(count), limit),
        };

        Ok((direction, window))
    }
}

/// Window of at most `limit` items ending at `end`
///
/// When the start clamps to zero the limit becomes `end`. Both the list and
/// the query adapter use this, so a backward fetch never reaches the item
/// at `end`, even if fewer than `limit` items are requested as a result.
pub(crate) fn backward_window(end: usize, limit: usize) -> Window {
    match end.saturating_sub(limit) {
        0 => Window::new(0, end),
        start => Window::new(start, limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PaginationError;

    #[test]
    fn test_resolve_limit_precedence() {
        assert_eq!(
            resolve_limit(&PaginationArgs::first(3), None),
            (Direction::Forward, 3)
        );
        assert_eq!(
            resolve_limit(&PaginationArgs::last(4), None),
            (Direction::Backward, 4)
        );

        let both = PaginationArgs {
            first: Some(2),
            last: Some(5),
            ..Default::default()
        };
        assert_eq!(resolve_limit(&both, None), (Direction::Forward, 2));
    }

    #[test]
    fn test_resolve_limit_defaults_to_empty_forward_page() {
        assert_eq!(
            resolve_limit(&PaginationArgs::default(), None),
            (Direction::Forward, 0)
        );
    }

    #[test]
    fn test_resolve_limit_max_clamp() {
        assert_eq!(
            resolve_limit(&PaginationArgs::first(100), Some(10)),
            (Direction::Forward, 10)
        );
        assert_eq!(
            resolve_limit(&PaginationArgs::last(5), Some(10)),
            (Direction::Backward, 5)
        );
    }

    #[test]
    fn test_resolve_offset() {
        assert_eq!(resolve_offset(&PaginationArgs::default()).unwrap(), None);

        let after = PaginationArgs {
            after: Some(CursorCodec::encode(2)),
            ..Default::default()
        };
        assert_eq!(resolve_offset(&after).unwrap(), Some(3));

        let before = PaginationArgs {
            before: Some(CursorCodec::encode(0)),
            ..Default::default()
        };
        assert_eq!(resolve_offset(&before).unwrap(), Some(0));
    }

    #[test]
    fn test_resolve_offset_prefers_after() {
        let args = PaginationArgs {
            after: Some(CursorCodec::encode(1)),
            before: Some(CursorCodec::encode(8)),
            ..Default::default()
        };
        assert_eq!(resolve_offset(&args).unwrap(), Some(2));
    }

    #[test]
    fn test_resolve_offset_propagates_decode_error() {
        let args = PaginationArgs {
            after: Some("garbage".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_offset(&args),
            Err(PaginationError::InvalidCursor(_))
        ));
    }

    #[test]
    fn test_backward_window() {
        let (direction, window) = PaginationArgs::last(3).window(10, None).unwrap();
        assert_eq!(direction, Direction::Backward);
        assert_eq!(window, Window::new(7, 3));

        let (_, clamped) = PaginationArgs::last(10).window(5, None).unwrap();
        assert_eq!(clamped, Window::new(0, 5));

        let before = PaginationArgs {
            last: Some(2),
            before: Some(CursorCodec::encode(5)),
            ..Default::default()
        };
        assert_eq!(before.window(10, None).unwrap().1, Window::new(3, 2));
    }

    #[test]
    fn test_forward_window() {
        let args = PaginationArgs {
            first: Some(2),
            after: Some(CursorCodec::encode(2)),
            ..Default::default()
        };
        assert_eq!(
            args.window(10, None).unwrap(),
            (Direction::Forward, Window::new(3, 2))
        );
    }

    #[test]
    fn test_args_deserialize() {
        let args: PaginationArgs = serde_json::from_str(r#"{"first": 5}"#).unwrap();
        assert_eq!(args, PaginationArgs::first(5));
    }
}
