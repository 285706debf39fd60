#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
//! A pattern-driven lexer for small DSLs and hand-written parsers.
//!
//! Implement [`Rules`] with the patterns and the classification of your
//! language, wrap it in a [`Scanner`], and walk the resulting
//! [`TokenStream`] with its cursor operations.
//!
//! ```
//! use relex::{Classified, Rules, Scanner};
//!
//! relex::declare_kinds! {
//!     name: Kind,
//!     kinds: {
//!         Number,
//!         Word,
//!     },
//! }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Value {
//!     Int(i64),
//!     Text(String),
//! }
//!
//! impl From<&str> for Value {
//!     fn from(text: &str) -> Self {
//!         Value::Text(text.to_string())
//!     }
//! }
//!
//! struct Lang;
//!
//! impl Rules for Lang {
//!     type Kind = Kind;
//!     type Value = Value;
//!
//!     fn catchable_patterns(&self) -> &[&str] {
//!         &[r"[0-9]+", r"[a-z]+"]
//!     }
//!
//!     fn non_catchable_patterns(&self) -> &[&str] {
//!         &[r"\s+"]
//!     }
//!
//!     fn classify(&self, text: &str) -> Classified<Kind, Value> {
//!         match text.parse::<i64>() {
//!             Ok(n) => Classified::new(Kind::Number).with_value(Value::Int(n)),
//!             Err(_) => Classified::new(Kind::Word),
//!         }
//!     }
//! }
//!
//! let scanner = Scanner::new(Lang);
//! let stream = scanner.tokenize("12 foo 34");
//!
//! assert_eq!(stream.read().map(|t| t.value()), Some(&Value::Int(12)));
//! assert!(stream.is_next_token(Some(&Kind::Word)));
//! assert_eq!(scanner.literal(&Kind::Word, true).to_string(), "Lang::Word");
//! ```
pub use relex_core::*;
pub use relex_macros::*;
