//! Matching configuration for composed scanner expressions.
//!
//! This module provides [`MatchMode`], the set of flags applied when a
//! scanner compiles its pattern list into one expression.
//!
//! # Example
//!
//! ```
//! use relex_core::MatchMode;
//!
//! // Case-insensitive, Unicode-aware matching
//! let mode = MatchMode::default();
//! assert!(mode.case_insensitive);
//!
//! // Exact-case matching with `.` spanning lines
//! let mode = MatchMode::new()
//!     .with_case_insensitive(false)
//!     .with_dot_matches_new_line(true);
//! assert!(!mode.case_insensitive);
//! ```

use regex::RegexBuilder;

/// Flags applied to the composed expression of a scanner.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `case_insensitive` | `true` |
/// | `unicode` | `true` |
/// | `multi_line` | `false` |
/// | `dot_matches_new_line` | `false` |
/// | `ignore_whitespace` | `false` |
/// | `swap_greed` | `false` |
/// | `size_limit` | `None` (engine default) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct MatchMode {
    /// Letters match regardless of case (`i`).
    pub case_insensitive: bool,

    /// Classes and case folding are Unicode aware (`u`).
    ///
    /// Disabling this restricts `\w`, `\d` and friends to ASCII.
    pub unicode: bool,

    /// `^` and `$` match at line boundaries (`m`).
    pub multi_line: bool,

    /// `.` also matches `\n` (`s`).
    pub dot_matches_new_line: bool,

    /// Whitespace and `#` comments inside patterns are ignored (`x`).
    pub ignore_whitespace: bool,

    /// Quantifiers are lazy by default (`U`).
    pub swap_greed: bool,

    /// Upper bound in bytes on the compiled expression.
    ///
    /// Pattern sets that compile past this limit trigger the whole-input
    /// fallback.
    pub size_limit: Option<usize>,
}

impl Default for MatchMode {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl MatchMode {
    /// Default mode, usable in const contexts.
    pub const DEFAULT: Self = Self {
        case_insensitive: true,
        unicode: true,
        multi_line: false,
        dot_matches_new_line: false,
        ignore_whitespace: false,
        swap_greed: false,
        size_limit: None,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub const fn with_case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    #[inline]
    pub const fn with_unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    #[inline]
    pub const fn with_multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    #[inline]
    pub const fn with_dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    #[inline]
    pub const fn with_ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    #[inline]
    pub const fn with_swap_greed(mut self, yes: bool) -> Self {
        self.swap_greed = yes;
        self
    }

    /// Sets the compiled size limit in bytes.
    #[inline]
    pub const fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Inline flag letters equivalent to this mode, e.g. `"iu"`.
    pub fn flags(&self) -> String {
        [
            (self.case_insensitive, 'i'),
            (self.unicode, 'u'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.ignore_whitespace, 'x'),
            (self.swap_greed, 'U'),
        ]
        .into_iter()
        .filter_map(|(on, flag)| on.then_some(flag))
        .collect()
    }

    pub(crate) fn builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .unicode(self.unicode)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .swap_greed(self.swap_greed);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_mode_defaults() {
        let mode = MatchMode::default();
        assert!(mode.case_insensitive);
        assert!(mode.unicode);
        assert!(!mode.multi_line);
        assert_eq!(mode.size_limit, None);
        assert_eq!(mode.flags(), "iu");
    }

    #[test]
    fn test_match_mode_builder() {
        let mode = MatchMode::new()
            .with_case_insensitive(false)
            .with_multi_line(true)
            .with_swap_greed(true)
            .with_size_limit(1 << 16);

        assert_eq!(mode.flags(), "umU");
        assert_eq!(mode.size_limit, Some(1 << 16));
    }

    #[test]
    fn test_builder_applies_case_flag() {
        let insensitive = MatchMode::new().builder("abc").build().unwrap();
        assert!(insensitive.is_match("ABC"));

        let exact = MatchMode::new()
            .with_case_insensitive(false)
            .builder("abc")
            .build()
            .unwrap();
        assert!(!exact.is_match("ABC"));
    }
}
