//! Pattern errors surfaced through a consumer error type.

use relex::{Classified, Error, Location, MatchMode, Rules, Scanner};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum ConfigError {
    #[error("invalid lexer patterns: {0}")]
    Patterns(#[from] Error),

    #[error("unexpected `{found}` at {at}")]
    Unexpected { found: String, at: Location },
}

struct Keys {
    catchable: &'static [&'static str],
    mode: MatchMode,
}

impl Rules for Keys {
    type Kind = &'static str;
    type Value = String;

    fn catchable_patterns(&self) -> &[&str] {
        self.catchable
    }

    fn non_catchable_patterns(&self) -> &[&str] {
        &[r"\s+"]
    }

    fn classify(&self, text: &str) -> Classified<&'static str, String> {
        if text.chars().all(char::is_alphanumeric) {
            Classified::new("KEY")
        } else {
            Classified::unknown()
        }
    }

    fn match_mode(&self) -> MatchMode {
        self.mode
    }
}

/// Validates the patterns up front, then rejects the first unknown token.
fn check_keys(rules: Keys, input: &str) -> Result<usize, ConfigError> {
    let scanner = Scanner::new(rules);
    scanner.compile()?;

    let stream = scanner.tokenize(input);
    match stream.iter().find(|token| token.is_unknown()) {
        Some(token) => Err(ConfigError::Unexpected {
            found: stream.slice(token).to_string(),
            at: stream.context().locate_token(token),
        }),
        None => Ok(stream.len()),
    }
}

#[test]
fn test_valid_patterns_pass_through() {
    let rules = Keys {
        catchable: &[r"\w+"],
        mode: MatchMode::DEFAULT,
    };
    assert_eq!(check_keys(rules, "alpha beta"), Ok(2));
}

#[test]
fn test_syntax_error_converts_with_question_mark() {
    let rules = Keys {
        catchable: &[r"[a-"],
        mode: MatchMode::DEFAULT,
    };
    let err = check_keys(rules, "alpha").unwrap_err();

    assert!(matches!(err, ConfigError::Patterns(Error::Syntax { .. })));
    assert!(err.to_string().starts_with("invalid lexer patterns: invalid pattern:"));
}

#[test]
fn test_size_limit_converts_with_question_mark() {
    let rules = Keys {
        catchable: &[r"\w{100}"],
        mode: MatchMode::new().with_size_limit(32),
    };
    let err = check_keys(rules, "alpha").unwrap_err();

    assert_eq!(err, ConfigError::Patterns(Error::TooBig { limit: 32 }));
    assert_eq!(
        err.to_string(),
        "invalid lexer patterns: compiled pattern exceeds size limit of 32 bytes"
    );
}

#[test]
fn test_unknown_token_reports_location() {
    let rules = Keys {
        catchable: &[r"\w+"],
        mode: MatchMode::DEFAULT,
    };
    let err = check_keys(rules, "alpha\n  $").unwrap_err();

    assert_eq!(
        err,
        ConfigError::Unexpected {
            found: "$".into(),
            at: Location::new(2, 3),
        }
    );
    assert_eq!(err.to_string(), "unexpected `$` at 2:3");
}
