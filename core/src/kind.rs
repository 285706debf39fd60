//! Token kinds and their symbolic names.
//!
//! A token kind is whatever tag a consumer's classification produces: a
//! plain integer, a static string, or an enum generated by
//! `declare_kinds!`. The symbolic names used in diagnostics are registered
//! up front in a [`LiteralTable`] instead of being discovered at runtime.

use core::fmt;
use std::borrow::Cow;

/// A classification tag carried by a token.
pub trait Kind: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Symbolic names for the tags of this kind, in declaration order.
    ///
    /// Scalar tags have no names by default.
    fn literals() -> LiteralTable<Self> {
        LiteralTable::new()
    }
}

macro_rules! impl_scalar_kind {
    ($($ty:ty),* $(,)?) => {
        $(impl Kind for $ty {})*
    };
}

impl_scalar_kind!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool, String,
    &'static str,
);

/// Ordered mapping from tag to symbolic name.
///
/// Lookups return the first registered name whose tag equals the query, so
/// aliases registered later never shadow the primary name.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralTable<K> {
    entries: Vec<(K, Cow<'static, str>)>,
}

impl<K> Default for LiteralTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> LiteralTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn with(mut self, kind: K, name: impl Into<Cow<'static, str>>) -> Self {
        self.insert(kind, name);
        self
    }

    pub fn insert(&mut self, kind: K, name: impl Into<Cow<'static, str>>) {
        self.entries.push((kind, name.into()));
    }

    pub fn lookup(&self, kind: &K) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, name)| name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(k, name)| (k, name.as_ref()))
    }
}

impl<K: PartialEq, N: Into<Cow<'static, str>>> FromIterator<(K, N)> for LiteralTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (kind, name) in iter {
            table.insert(kind, name);
        }
        table
    }
}

/// Result of a literal lookup: a registered name, or the tag itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a, K> {
    Named {
        scope: Option<&'a str>,
        name: &'a str,
    },
    Raw(&'a K),
}

impl<K> Literal<'_, K> {
    /// The bare symbolic name, if one was registered.
    pub fn name(&self) -> Option<&str> {
        match self {
            Literal::Named { name, .. } => Some(name),
            Literal::Raw(_) => None,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Literal::Named { .. })
    }
}

impl<K: fmt::Display> fmt::Display for Literal<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Named {
                scope: Some(scope),
                name,
            } => write!(f, "{}::{}", scope, name),
            Literal::Named { scope: None, name } => f.write_str(name),
            Literal::Raw(kind) => write!(f, "{}", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_first_registration() {
        let table = LiteralTable::new()
            .with(1, "T_NUMBER")
            .with(2, "T_WORD")
            .with(1, "T_INTEGER");

        assert_eq!(table.lookup(&1), Some("T_NUMBER"));
        assert_eq!(table.lookup(&2), Some("T_WORD"));
        assert_eq!(table.lookup(&3), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_scalar_kinds_have_no_names() {
        assert!(<u32 as Kind>::literals().is_empty());
        assert!(<&'static str as Kind>::literals().is_empty());
    }

    #[test]
    fn test_literal_display() {
        let named: Literal<'_, u8> = Literal::Named {
            scope: Some("Calc"),
            name: "PLUS",
        };
        let bare: Literal<'_, u8> = Literal::Named {
            scope: None,
            name: "PLUS",
        };
        assert_eq!(named.to_string(), "Calc::PLUS");
        assert_eq!(bare.to_string(), "PLUS");
        assert_eq!(Literal::Raw(&7u8).to_string(), "7");
        assert_eq!(Literal::Raw(&7u8).name(), None);
    }

    #[test]
    fn test_collect_table() {
        let table: LiteralTable<&'static str> =
            [("num", "NUMBER"), ("word", "WORD")].into_iter().collect();
        assert_eq!(table.lookup(&"word"), Some("WORD"));
    }
}
