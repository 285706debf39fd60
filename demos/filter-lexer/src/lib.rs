#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Search Filter Example
//!
//! Parses issue-tracker style filters such as
//! `status:open -label:wontfix priority>=2 OR "data race"` with plain
//! string tags as token kinds. Unrecognised characters are reported and
//! ignored; a malformed term drops the `OR` branch it belongs to.
//!
//! # Example
//!
//! ```
//! let (query, errors) = filter_lexer::parse("status:open -label:bug");
//! assert!(errors.is_empty());
//! assert!(query.matches(&[("status", "open"), ("label", "docs")]));
//! assert!(!query.matches(&[("status", "open"), ("label", "bug")]));
//! ```

mod query;

pub use query::{Comparison, Query, Term};

use relex::{Classified, Location, LiteralTable, Rules, Scanner, Token, TokenStream};
use thiserror::Error;

pub const WORD: &str = "WORD";
pub const QUOTED: &str = "QUOTED";
pub const COLON: &str = "COLON";
pub const COMPARE: &str = "COMPARE";
pub const NOT: &str = "NOT";
pub const OR: &str = "OR";
pub const AND: &str = "AND";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("unrecognised input `{text}` at {at}")]
    Unrecognised { text: String, at: Location },

    #[error("unexpected {found} at {at}")]
    Unexpected { found: String, at: Location },

    #[error("missing value for `{field}` at {at}")]
    MissingValue { field: String, at: Location },

    #[error("expected a term after `-` at {at}")]
    DanglingNot { at: Location },
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FilterRules;

impl Rules for FilterRules {
    type Kind = &'static str;
    type Value = String;

    fn catchable_patterns(&self) -> &[&str] {
        &[r#""[^"]*""#, r"[<>]=?|:", r"-", r"[\w.*][\w.*-]*"]
    }

    fn non_catchable_patterns(&self) -> &[&str] {
        &[r"\s+"]
    }

    fn classify(&self, text: &str) -> Classified<&'static str, String> {
        match text {
            ":" => Classified::new(COLON),
            "<" | "<=" | ">" | ">=" => Classified::new(COMPARE),
            "-" => Classified::new(NOT),
            "OR" => Classified::new(OR),
            "AND" => Classified::new(AND),
            _ if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') => {
                Classified::new(QUOTED).with_value(text[1..text.len() - 1].to_string())
            }
            _ if text.starts_with(|c: char| c.is_alphanumeric() || "_.*".contains(c)) => {
                Classified::new(WORD)
            }
            _ => Classified::unknown(),
        }
    }
}

pub type FilterStream = TokenStream<&'static str>;

/// Scanner with human-readable names for the diagnostics.
pub fn scanner() -> Scanner<FilterRules> {
    let names = LiteralTable::new()
        .with(WORD, "word")
        .with(QUOTED, "quoted text")
        .with(COLON, "`:`")
        .with(COMPARE, "comparison")
        .with(NOT, "`-`")
        .with(OR, "`OR`")
        .with(AND, "`AND`");
    Scanner::with_literals(FilterRules, names)
}

/// Parses `input` into a query, collecting every problem found on the way.
pub fn parse(input: &str) -> (Query, Vec<FilterError>) {
    let scanner = scanner();
    let mut stream = scanner.tokenize(input);
    let mut query = Query::default();
    let mut errors = Vec::new();

    while let Some(token) = stream.read().cloned() {
        match token.kind().copied() {
            Some(OR) => query.branch(),
            Some(AND) => {}
            Some(NOT | WORD | QUOTED) => match term(&mut stream, token) {
                Ok(term) => query.push(term),
                Err(err) => {
                    errors.push(err);
                    query.discard_branch();
                    // the failed term may have stopped on the `OR` itself
                    if stream.read().is_some_and(|t| t.is(&OR)) {
                        query.branch();
                    } else {
                        stream.skip_until(Some(&OR));
                    }
                }
            },
            Some(kind) => errors.push(FilterError::Unexpected {
                found: scanner.literal(&kind, false).to_string(),
                at: stream.where_current(),
            }),
            None => errors.push(FilterError::Unrecognised {
                text: stream.slice(&token).to_string(),
                at: stream.where_current(),
            }),
        }

        if !stream.next() {
            break;
        }
    }

    (query, errors)
}

/// Moves onto the following token and returns it.
fn advance(stream: &mut FilterStream) -> Option<Token<&'static str>> {
    if stream.next() {
        stream.read().cloned()
    } else {
        None
    }
}

/// Parses one term starting at the current token, leaving the cursor on
/// its last token.
fn term(stream: &mut FilterStream, first: Token<&'static str>) -> Result<Term, FilterError> {
    let at = stream.where_current();
    let (negated, head) = if first.is(&NOT) {
        match advance(stream) {
            Some(next) if next.is(&WORD) || next.is(&QUOTED) => (true, next),
            _ => return Err(FilterError::DanglingNot { at }),
        }
    } else {
        (false, first)
    };

    if !head.is(&WORD) || !stream.is_next_token_any(&[Some(COLON), Some(COMPARE)]) {
        return Ok(Term::new(negated, None, Comparison::Contains, head.into_value(), at));
    }

    let field = head.into_value();
    let comparison = advance(stream)
        .and_then(|op| Comparison::from_symbol(op.value()))
        .unwrap_or(Comparison::Contains);

    match advance(stream) {
        Some(value) if value.is(&WORD) || value.is(&QUOTED) => Ok(Term::new(
            negated,
            Some(field),
            comparison,
            value.into_value(),
            at,
        )),
        _ => Err(FilterError::MissingValue { field, at }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_value_is_unwrapped() {
        let stream = scanner().tokenize(r#"title:"data race""#);
        let last = &stream.tokens()[2];

        assert!(last.is(&QUOTED));
        assert_eq!(last.value(), "data race");
        assert_eq!(stream.slice(last), r#""data race""#);
    }

    #[test]
    fn test_hyphen_inside_word() {
        let stream = scanner().tokenize("-due:2024-01-31");
        let kinds: Vec<_> = stream.iter().filter_map(Token::kind).copied().collect();
        assert_eq!(kinds, vec![NOT, WORD, COLON, WORD]);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let scanner = scanner();
        assert!(scanner.is_a("OR", &OR));
        assert!(scanner.is_a("or", &WORD));
    }
}
