//! Offset cursor encoding/decoding

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Tag every cursor payload carries before its decimal offset.
///
/// Shared with other Relay array-connection implementations, so cursors
/// stay interchangeable with them.
pub const CURSOR_PREFIX: &str = "arrayconnection:";

/// Cursor encoding/decoding
pub struct CursorCodec;

impl CursorCodec {
    /// Encode an offset as an opaque cursor
    pub fn encode(offset: usize) -> String {
        BASE64.encode(format!("{CURSOR_PREFIX}{offset}"))
    }

    /// Decode a cursor back to the offset it was minted for
    pub fn decode(cursor: &str) -> crate::Result<usize> {
        let bytes = BASE64
            .decode(cursor.as_bytes())
            .map_err(|e| invalid(cursor, e))?;
        let text = String::from_utf8(bytes).map_err(|e| invalid(cursor, e))?;
        let payload = text
            .strip_prefix(CURSOR_PREFIX)
            .ok_or_else(|| invalid(cursor, "missing arrayconnection prefix"))?;
        payload.parse::<usize>().map_err(|e| invalid(cursor, e))
    }
}

fn invalid(cursor: &str, reason: impl std::fmt::Display) -> crate::PaginationError {
    tracing::debug!(cursor, %reason, "rejected pagination cursor");
    crate::PaginationError::InvalidCursor(format!("{cursor:?}: {reason}"))
}
