use crate::span::Span;

/// One lexical unit produced by a scanner.
///
/// A token is immutable once built. Its `value` is either the matched text
/// or the replacement produced during classification (a parsed number, for
/// instance); its `kind` is `None` when classification did not recognise
/// the text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<K, V = String> {
    value: V,
    kind: Option<K>,
    position: usize,
    len: usize,
}

impl<K, V> Token<K, V> {
    /// Creates a token whose source length is unknown (zero).
    ///
    /// Use [`Token::with_len`] to record how many bytes of the original
    /// input the token covered.
    #[inline]
    pub fn new(value: V, kind: Option<K>, position: usize) -> Self {
        Self {
            value,
            kind,
            position,
            len: 0,
        }
    }

    #[inline]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }

    #[inline]
    pub fn kind(&self) -> Option<&K> {
        self.kind.as_ref()
    }

    /// Absolute byte offset of the first character in the scanned input.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.position, self.position.saturating_add(self.len))
    }

    /// Returns `true` if this token was classified as `kind`.
    #[inline]
    pub fn is(&self, kind: &K) -> bool
    where
        K: PartialEq,
    {
        self.kind.as_ref() == Some(kind)
    }

    /// Returns `true` if classification did not recognise this token.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.kind.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_follows_position_and_len() {
        let token = Token::new("foo".to_string(), Some(2u8), 3).with_len(3);
        assert_eq!(token.span(), Span::new(3, 6));
        assert_eq!(token.position(), 3);
        assert!(token.is(&2));
        assert!(!token.is(&1));
    }

    #[test]
    fn test_transformed_value_keeps_source_len() {
        let token: Token<&str, i64> = Token::new(12, Some("NUMBER"), 0).with_len(2);
        assert_eq!(*token.value(), 12);
        assert_eq!(token.span().len(), 2);
    }

    #[test]
    fn test_unknown_token() {
        let token: Token<u8> = Token::new("?".into(), None, 0);
        assert!(token.is_unknown());
        assert!(token.is_empty());
        assert_eq!(token.kind(), None);
    }
}
