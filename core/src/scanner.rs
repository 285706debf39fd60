//! Pattern-driven scanning.
//!
//! A [`Scanner`] wraps a set of [`Rules`] and turns input text into a fully
//! materialized [`TokenStream`]. The composed expression is built on first
//! use and cached for the lifetime of the scanner.
//!
//! # Example
//!
//! ```
//! use relex_core::{Classified, Rules, Scanner};
//!
//! struct Numbers;
//!
//! impl Rules for Numbers {
//!     type Kind = u8;
//!     type Value = String;
//!
//!     fn catchable_patterns(&self) -> &[&str] {
//!         &[r"[0-9]+"]
//!     }
//!
//!     fn non_catchable_patterns(&self) -> &[&str] {
//!         &[r"\s+"]
//!     }
//!
//!     fn classify(&self, text: &str) -> Classified<u8, String> {
//!         match text.parse::<u64>() {
//!             Ok(_) => Classified::new(1),
//!             Err(_) => Classified::unknown(),
//!         }
//!     }
//! }
//!
//! let scanner = Scanner::new(Numbers);
//! let mut stream = scanner.tokenize("1 22 x");
//! assert_eq!(stream.len(), 3);
//!
//! // "x" is not a number: it still becomes a token, without a kind
//! stream.skip_until(Some(&1));
//! assert_eq!(stream.position(), 0);
//! stream.skip_until(Some(&9));
//! assert!(stream.at_end());
//! assert!(stream.read().is_some_and(|t| t.is_unknown()));
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::Error;
use crate::kind::{Kind, Literal, LiteralTable};
use crate::rules::{Classified, Rules};
use crate::split::split;
use crate::stream::TokenStream;
use crate::token::Token;

pub struct Scanner<R: Rules> {
    rules: R,
    literals: LiteralTable<R::Kind>,
    compiled: OnceLock<Result<Option<Regex>, Error>>,
}

impl<R: Rules> Scanner<R> {
    /// Creates a scanner whose literal names come from the rules' kind.
    pub fn new(rules: R) -> Self {
        Self::with_literals(rules, R::Kind::literals())
    }

    /// Creates a scanner with an explicit literal table.
    pub fn with_literals(rules: R, literals: LiteralTable<R::Kind>) -> Self {
        Self {
            rules,
            literals,
            compiled: OnceLock::new(),
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn literals(&self) -> &LiteralTable<R::Kind> {
        &self.literals
    }

    /// The composed alternation: each catchable pattern as a capture
    /// group, then the non-catchable patterns bare.
    ///
    /// Returns `None` when the rules supply no patterns at all.
    pub fn pattern_source(&self) -> Option<String> {
        let catchable = self
            .rules
            .catchable_patterns()
            .iter()
            .map(|pattern| format!("({})", pattern));
        let non_catchable = self
            .rules
            .non_catchable_patterns()
            .iter()
            .map(|pattern| (*pattern).to_string());

        let parts: Vec<String> = catchable.chain(non_catchable).collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("|"))
        }
    }

    fn compiled(&self) -> &Result<Option<Regex>, Error> {
        self.compiled.get_or_init(|| {
            let Some(source) = self.pattern_source() else {
                tracing::debug!(scanner = self.rules.name(), "no patterns, scanning whole input");
                return Ok(None);
            };

            let mode = self.rules.match_mode();
            match mode.builder(&source).build() {
                Ok(regex) => {
                    tracing::debug!(
                        scanner = self.rules.name(),
                        flags = %mode.flags(),
                        pattern = %source,
                        "compiled scanner expression"
                    );
                    Ok(Some(regex))
                }
                Err(err) => {
                    let err = Error::from(err);
                    tracing::warn!(
                        scanner = self.rules.name(),
                        error = %err,
                        "scanner expression failed to compile, input will be scanned as a single token"
                    );
                    Err(err)
                }
            }
        })
    }

    /// Compiles the composed expression, reporting why it failed.
    ///
    /// `Ok(None)` means no patterns were supplied. The result is cached;
    /// later calls and [`Scanner::tokenize`] reuse it.
    pub fn compile(&self) -> Result<Option<&Regex>, Error> {
        match self.compiled() {
            Ok(regex) => Ok(regex.as_ref()),
            Err(err) => Err(err.clone()),
        }
    }

    /// Scans `input` into a token stream.
    ///
    /// Never fails: if the expression cannot be compiled, the whole input
    /// becomes a single candidate at offset 0. Empty input yields an empty
    /// stream.
    pub fn tokenize(&self, input: &str) -> TokenStream<R::Kind, R::Value> {
        let regex = self.compiled().as_ref().ok().and_then(Option::as_ref);

        let tokens: Vec<_> = split(regex, input)
            .into_iter()
            .map(|candidate| {
                let (kind, value) = self.classify(candidate.text);
                Token::new(value, kind, candidate.offset).with_len(candidate.text.len())
            })
            .collect();

        tracing::trace!(
            scanner = self.rules.name(),
            tokens = tokens.len(),
            bytes = input.len(),
            "tokenized input"
        );

        TokenStream::new(tokens, input)
    }

    /// Classifies `raw` the way [`Scanner::tokenize`] does, returning the
    /// kind and the resulting token value.
    pub fn classify(&self, raw: &str) -> (Option<R::Kind>, R::Value) {
        let Classified { kind, value } = self.rules.classify(raw);
        let value = value.unwrap_or_else(|| R::Value::from(raw));
        (kind, value)
    }

    /// Symbolic name registered for `kind`, or the kind itself.
    ///
    /// With `qualified`, names are prefixed with the rules' scope, as in
    /// `Calc::NUMBER`.
    pub fn literal<'a>(&'a self, kind: &'a R::Kind, qualified: bool) -> Literal<'a, R::Kind> {
        match self.literals.lookup(kind) {
            Some(name) => Literal::Named {
                scope: qualified.then(|| self.rules.name()),
                name,
            },
            None => Literal::Raw(kind),
        }
    }

    /// `true` if `raw` classifies as `expected`.
    pub fn is_a(&self, raw: &str, expected: &R::Kind) -> bool {
        self.rules.classify(raw).kind.as_ref() == Some(expected)
    }
}

impl<R: Rules + core::fmt::Debug> core::fmt::Debug for Scanner<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scanner")
            .field("rules", &self.rules)
            .field("compiled", &self.compiled.get().is_some())
            .finish_non_exhaustive()
    }
}
