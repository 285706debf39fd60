use core::fmt;

use crate::config::MatchMode;
use crate::kind::Kind;

/// Lexical rules a [`Scanner`](crate::Scanner) is built from.
///
/// Implementors supply the pattern lists and the classification function;
/// tokenizing, literal lookup and type checks are provided once by the
/// scanner in terms of these.
///
/// # Example
///
/// ```
/// use relex_core::{Classified, Rules};
///
/// struct Words;
///
/// impl Rules for Words {
///     type Kind = &'static str;
///     type Value = String;
///
///     fn catchable_patterns(&self) -> &[&str] {
///         &[r"[a-z]+", r"[0-9]+"]
///     }
///
///     fn non_catchable_patterns(&self) -> &[&str] {
///         &[r"\s+"]
///     }
///
///     fn classify(&self, text: &str) -> Classified<&'static str, String> {
///         if text.chars().all(|c| c.is_ascii_digit()) {
///             Classified::new("NUMBER")
///         } else {
///             Classified::new("WORD")
///         }
///     }
/// }
/// ```
pub trait Rules {
    /// Tag type attached to tokens.
    type Kind: Kind;

    /// Token value type. Unreplaced candidates are converted from their
    /// matched text.
    type Value: for<'a> From<&'a str> + Clone + fmt::Debug;

    /// Patterns whose matches become tokens, in priority order.
    ///
    /// Each fragment is wrapped in its own capture group; fragments should
    /// use `(?:...)` for internal grouping, since any extra capture group
    /// produces its own token.
    fn catchable_patterns(&self) -> &[&str];

    /// Patterns whose matches separate tokens and are discarded.
    fn non_catchable_patterns(&self) -> &[&str];

    /// Maps matched text to a kind, optionally replacing the token value.
    ///
    /// The kind is always decided on the original text.
    fn classify(&self, text: &str) -> Classified<Self::Kind, Self::Value>;

    /// Matching flags for the composed expression.
    fn match_mode(&self) -> MatchMode {
        MatchMode::DEFAULT
    }

    /// Scope used when qualifying literal names.
    ///
    /// Defaults to the type name without its module path or generic
    /// arguments, so `Wrapper<m::Inner>` is scoped as `Wrapper`.
    fn name(&self) -> &str {
        let full = core::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }
}

/// Outcome of classifying one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<K, V> {
    pub kind: Option<K>,
    pub value: Option<V>,
}

impl<K, V> Classified<K, V> {
    /// Classified as `kind`, keeping the matched text as value.
    #[inline]
    pub fn new(kind: K) -> Self {
        Self {
            kind: Some(kind),
            value: None,
        }
    }

    /// Not recognised; the token carries no kind.
    #[inline]
    pub fn unknown() -> Self {
        Self {
            kind: None,
            value: None,
        }
    }

    /// Replaces the token value.
    #[inline]
    pub fn with_value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }
}

impl<K, V> From<Option<K>> for Classified<K, V> {
    #[inline]
    fn from(kind: Option<K>) -> Self {
        Self { kind, value: None }
    }
}
