//! Cursor over a fixed list of scanned tokens.
//!
//! A [`TokenStream`] keeps two pieces of state: the `position` of the
//! current token, which only moves forward unless explicitly reset, and a
//! transient `peek` offset layered on top of it for multi-step lookahead
//! that does not commit.
//!
//! ```text
//!   tokens:   [ t0 ][ t1 ][ t2 ][ t3 ][ t4 ]
//!                    ^            ^
//!                 position   position + peek
//! ```
//!
//! Out-of-range reads never fail: they return `None` (or `false` for
//! [`TokenStream::next`]).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::resolver::{Location, PositionResolver};
use crate::token::Token;

pub struct TokenStream<K, V = String> {
    tokens: Arc<[Token<K, V>]>,
    links: Arc<[AtomicBool]>,
    resolver: PositionResolver,
    position: usize,
    peek: isize,
}

impl<K, V> TokenStream<K, V> {
    /// Creates a stream over `tokens`, bound to the text they were scanned
    /// from.
    pub fn new(tokens: Vec<Token<K, V>>, source: impl Into<Arc<str>>) -> Self {
        let links = tokens.iter().map(|_| AtomicBool::new(false)).collect();
        Self {
            tokens: tokens.into(),
            links,
            resolver: PositionResolver::new(source),
            position: 0,
            peek: 0,
        }
    }

    /// Index of the current token.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The resolver bound to the original input.
    #[inline]
    pub fn context(&self) -> &PositionResolver {
        &self.resolver
    }

    #[inline]
    pub fn source(&self) -> &str {
        self.resolver.source()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &[Token<K, V>] {
        &self.tokens
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token<K, V>> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Token<K, V>> {
        self.tokens.iter()
    }

    /// The original text covered by `token`, regardless of its value.
    pub fn slice(&self, token: &Token<K, V>) -> &str {
        let span = token.span();
        self.source().get(span.start..span.end).unwrap_or_default()
    }

    fn offset(&self, offset: isize) -> Option<usize> {
        self.position
            .checked_add_signed(offset)
            .filter(|index| *index < self.tokens.len())
    }

    #[inline]
    fn at(&self, offset: isize) -> Option<&Token<K, V>> {
        self.offset(offset).and_then(|index| self.tokens.get(index))
    }

    /// `true` when no token follows the current one.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.look_ahead().is_none()
    }

    /// Moves to the following token.
    ///
    /// Always clears the peek offset. Returns `false` and leaves the cursor
    /// in place when there is no following token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.peek = 0;

        if self.at(1).is_none() {
            return false;
        }

        self.position += 1;
        true
    }

    /// The current token.
    ///
    /// Reading is what links the current token to its follower, see
    /// [`TokenStream::linked_next`].
    pub fn read(&self) -> Option<&Token<K, V>> {
        let token = self.tokens.get(self.position)?;
        if self.at(1).is_some() {
            if let Some(link) = self.links.get(self.position) {
                link.store(true, Ordering::Relaxed);
            }
        }
        Some(token)
    }

    /// The token following the one at `index`, once that token has been
    /// read as current.
    ///
    /// Tokens that were never the cursor's current token during a
    /// [`TokenStream::read`] have no link, even when a following token
    /// exists.
    pub fn linked_next(&self, index: usize) -> Option<&Token<K, V>> {
        if !self.links.get(index)?.load(Ordering::Relaxed) {
            return None;
        }
        self.tokens.get(index.checked_add(1)?)
    }

    #[inline]
    pub fn look_ahead(&self) -> Option<&Token<K, V>> {
        self.at(1)
    }

    #[inline]
    pub fn look_behind(&self) -> Option<&Token<K, V>> {
        self.at(-1)
    }

    /// Moves the peek offset by `distance` and returns the token there.
    ///
    /// Offsets accumulate across calls until reset. A miss leaves the peek
    /// offset where it was.
    pub fn peek(&mut self, distance: isize) -> Option<&Token<K, V>> {
        let peek = self.peek.saturating_add(distance);
        let index = self.offset(peek)?;
        self.peek = peek;
        self.tokens.get(index)
    }

    /// Like [`TokenStream::peek`], but the peek offset is reset afterwards
    /// whether or not a token was found.
    pub fn glimpse(&mut self, distance: isize) -> Option<&Token<K, V>> {
        let index = self.offset(self.peek.saturating_add(distance));
        self.peek = 0;
        index.and_then(|index| self.tokens.get(index))
    }

    #[inline]
    pub fn reset_peek(&mut self) {
        self.peek = 0;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.peek = 0;
        self.position = 0;
    }

    /// Places the cursor at `position` without touching the peek offset.
    ///
    /// Out-of-range positions are accepted; reads from there return `None`.
    #[inline]
    pub fn reset_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Location of the current token, or of the end of the text when the
    /// cursor is out of range.
    pub fn where_current(&self) -> Location {
        match self.tokens.get(self.position) {
            Some(token) => self.resolver.locate_token(token),
            None => self.resolver.locate(None),
        }
    }

    /// Creates a copy sharing tokens, source and links, with its own
    /// cursor.
    pub fn fork(&self) -> Self {
        Self {
            tokens: Arc::clone(&self.tokens),
            links: Arc::clone(&self.links),
            resolver: self.resolver.clone(),
            position: self.position,
            peek: self.peek,
        }
    }
}

impl<K: PartialEq, V> TokenStream<K, V> {
    /// Advances while the lookahead is not of `kind`.
    ///
    /// Decides on the lookahead, so the cursor stops on the token right
    /// before the first `kind` token, not on it. Without any `kind` token
    /// ahead the cursor ends on the last token. `None` targets unclassified
    /// tokens.
    pub fn skip_until(&mut self, kind: Option<&K>) {
        while self.look_ahead().is_some_and(|token| token.kind() != kind) {
            self.next();
        }
    }

    /// `true` if the lookahead is of `kind`; `None` asks for an
    /// unclassified token.
    pub fn is_next_token(&self, kind: Option<&K>) -> bool {
        self.look_ahead().is_some_and(|token| token.kind() == kind)
    }

    pub fn is_next_token_any(&self, kinds: &[Option<K>]) -> bool {
        self.look_ahead()
            .is_some_and(|token| kinds.iter().any(|kind| kind.as_ref() == token.kind()))
    }
}

impl<K: core::fmt::Debug, V: core::fmt::Debug> core::fmt::Debug for TokenStream<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenStream")
            .field("tokens", &self.tokens)
            .field("position", &self.position)
            .field("peek", &self.peek)
            .finish_non_exhaustive()
    }
}

impl<'a, K, V> IntoIterator for &'a TokenStream<K, V> {
    type Item = &'a Token<K, V>;
    type IntoIter = core::slice::Iter<'a, Token<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

// Compile-time assertions for TokenStream
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<TokenStream<u32, String>>();
    assert_sync::<TokenStream<u32, String>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(kinds: &[u8]) -> TokenStream<u8> {
        let mut source = String::new();
        let tokens = kinds
            .iter()
            .map(|kind| {
                let position = source.len();
                let text = format!("t{}", kind);
                source.push_str(&text);
                source.push(' ');
                Token::new(text.clone(), Some(*kind), position).with_len(text.len())
            })
            .collect();
        TokenStream::new(tokens, source)
    }

    fn kind_of(token: Option<&Token<u8>>) -> Option<u8> {
        token.and_then(Token::kind).copied()
    }

    #[test]
    fn test_next_moves_until_last_token() {
        let mut ts = stream(&[1, 2, 3]);
        assert!(ts.next());
        assert!(ts.next());
        assert!(!ts.next());
        assert_eq!(ts.position(), 2);
        assert!(ts.at_end());
    }

    #[test]
    fn test_peek_accumulates_and_does_not_commit_misses() {
        let mut ts = stream(&[1, 2, 3]);
        assert_eq!(kind_of(ts.peek(1)), Some(2));
        assert_eq!(kind_of(ts.peek(1)), Some(3));
        assert_eq!(kind_of(ts.peek(1)), None);
        // the failed step was not committed
        assert_eq!(kind_of(ts.peek(-1)), Some(2));
        ts.reset_peek();
        assert_eq!(kind_of(ts.peek(1)), Some(2));
    }

    #[test]
    fn test_glimpse_uses_pending_peek_once() {
        let mut ts = stream(&[1, 2, 3, 4]);
        ts.peek(1);
        assert_eq!(kind_of(ts.glimpse(1)), Some(3));
        assert_eq!(kind_of(ts.glimpse(1)), Some(2));
        assert_eq!(kind_of(ts.glimpse(1)), Some(2));
    }

    #[test]
    fn test_next_clears_peek() {
        let mut ts = stream(&[1, 2, 3, 4]);
        ts.peek(2);
        ts.next();
        assert_eq!(kind_of(ts.peek(1)), Some(3));
    }

    #[test]
    fn test_look_behind_at_start_is_none() {
        let mut ts = stream(&[1, 2]);
        assert!(ts.look_behind().is_none());
        ts.next();
        assert_eq!(kind_of(ts.look_behind()), Some(1));
    }

    #[test]
    fn test_links_are_established_by_read() {
        let mut ts = stream(&[1, 2, 3]);
        assert!(ts.linked_next(0).is_none());

        ts.read();
        assert_eq!(kind_of(ts.linked_next(0)), Some(2));
        assert!(ts.linked_next(1).is_none());

        ts.next();
        ts.next();
        ts.read();
        // the last token has no follower to link to
        assert!(ts.linked_next(2).is_none());
    }

    #[test]
    fn test_fork_shares_links_but_not_cursor() {
        let ts = stream(&[1, 2, 3]);
        let mut fork = ts.fork();
        fork.next();
        fork.read();

        assert_eq!(ts.position(), 0);
        assert_eq!(kind_of(ts.linked_next(1)), Some(3));
    }

    #[test]
    fn test_slice_and_where_current() {
        let mut ts = stream(&[1, 2]);
        ts.next();
        let token = ts.read().cloned();
        assert_eq!(token.as_ref().map(|t| ts.slice(t)), Some("t2"));
        assert_eq!(ts.where_current(), Location::new(1, 4));

        ts.reset_position(9);
        assert_eq!(ts.where_current(), Location::new(1, 7));
    }

    #[test]
    fn test_reset_position_keeps_peek() {
        let mut ts = stream(&[1, 2, 3, 4]);
        ts.peek(1);
        ts.reset_position(1);
        assert_eq!(kind_of(ts.peek(1)), Some(4));
        ts.reset();
        assert_eq!(ts.position(), 0);
        assert_eq!(kind_of(ts.peek(1)), Some(2));
    }
}
