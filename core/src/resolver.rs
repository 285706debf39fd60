//! Line and column resolution for byte offsets.

use core::fmt;
use std::sync::Arc;

use crate::token::Token;

/// A 1-based line and column pair.
///
/// Columns count bytes, so the column right after a multi-byte character
/// advances by the character's encoded length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<Location> for (usize, usize) {
    fn from(loc: Location) -> Self {
        (loc.line, loc.column)
    }
}

/// Resolves offsets into the text a token stream was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionResolver {
    source: Arc<str>,
}

impl PositionResolver {
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The original input before `position`.
    ///
    /// Offsets past the end clamp to the full text; offsets inside a
    /// multi-byte character are moved back to its first byte.
    pub fn until(&self, position: usize) -> &str {
        let mut end = position.min(self.source.len());
        while !self.source.is_char_boundary(end) {
            end -= 1;
        }
        &self.source[..end]
    }

    /// Resolves `position` to a line and column.
    ///
    /// `None` resolves the end of the text. Line breaks are `\n` and `\r\n`;
    /// a lone `\r` is not a break.
    pub fn locate(&self, position: Option<usize>) -> Location {
        let text = match position {
            Some(position) => self.until(position),
            None => &self.source,
        };

        // `\r\n` contributes the same single break as `\n`; the `\r` only
        // matters when it ends the last segment.
        let line = text.matches('\n').count() + 1;
        let last = match text.rfind('\n') {
            Some(idx) => &text[idx + 1..],
            None => text,
        };

        Location::new(line, last.len() + 1)
    }

    pub fn locate_token<K, V>(&self, token: &Token<K, V>) -> Location {
        self.locate(Some(token.position()))
    }
}
