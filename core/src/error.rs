//! Core error types for relex.
//!
//! Scanning itself never fails: a pattern set that cannot be compiled makes
//! the scanner fall back to a single whole-input token. These errors are
//! only surfaced by [`Scanner::compile`](crate::Scanner::compile), for
//! consumers that want to validate their patterns up front.
//!
//! Parser crates built on top should define their own error type and
//! implement `From<relex::Error>` where they propagate compile failures.
//!
//! # Example
//!
//! ```ignore
//! use thiserror::Error;
//!
//! #[derive(Error, Debug)]
//! pub enum MyParseError {
//!     #[error("invalid lexer patterns: {0}")]
//!     Patterns(#[from] relex::Error),
//!
//!     #[error("unexpected {found} at {at}")]
//!     Unexpected { found: String, at: relex::Location },
//! }
//! ```

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The composed expression is not valid regex syntax.
    ///
    /// The message is the engine's own description, which points at the
    /// offending part of the composed expression.
    Syntax {
        message: String,
    },

    /// The composed expression compiled past the configured size limit.
    TooBig {
        /// Size limit in bytes that was exceeded.
        limit: usize,
    },
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        match err {
            regex::Error::CompiledTooBig(limit) => Error::TooBig { limit },
            other => Error::Syntax {
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax { message } => {
                write!(f, "invalid pattern: {}", message)
            }
            Error::TooBig { limit } => {
                write!(f, "compiled pattern exceeds size limit of {} bytes", limit)
            }
        }
    }
}

impl std::error::Error for Error {}
