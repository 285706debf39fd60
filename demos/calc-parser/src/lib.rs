#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Calculator Example
//!
//! This example builds a small calculator language on top of relex:
//! - Numbers (`3`, `2.5`, `1e3`), converted to `f64` during classification
//! - Variables and assignment (`x = 2 * y`)
//! - `+ - * /`, unary minus and parentheses
//! - `;`-separated statements with per-statement error recovery
//! - `#` comments
//!
//! # Example
//!
//! ```
//! use calc_parser::Calculator;
//!
//! let mut calc = Calculator::new();
//! let results = calc.eval("x = 4; x * (2 - 0.5)");
//! assert_eq!(results, vec![Ok(4.0), Ok(6.0)]);
//! ```

mod eval;

pub use eval::Calculator;

use relex::{Classified, Location, Rules, Scanner, TokenStream};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("expected {expect}, found `{found}` at {at}")]
    Expected {
        expect: &'static str,
        found: String,
        at: Location,
    },

    #[error("expected {expect}, found end of input")]
    Empty { expect: &'static str },

    #[error("unrecognised input `{text}` at {at}")]
    Unrecognised { text: String, at: Location },

    #[error("unknown variable `{name}` at {at}")]
    UnknownVariable { name: String, at: Location },

    #[error("division by zero at {at}")]
    DivisionByZero { at: Location },
}

relex::declare_kinds! {
    /// Token kinds of the calculator language.
    name: CalcKind,
    kinds: {
        #[literal("NUMBER")]
        #[fmt("number")]
        Number,
        #[literal("IDENT")]
        #[fmt("identifier")]
        Ident,
        #[literal("PLUS")]
        #[fmt("`+`")]
        Plus,
        #[literal("MINUS")]
        #[fmt("`-`")]
        Minus,
        #[literal("STAR")]
        #[fmt("`*`")]
        Star,
        #[literal("SLASH")]
        #[fmt("`/`")]
        Slash,
        #[literal("LPAREN")]
        #[fmt("`(`")]
        LParen,
        #[literal("RPAREN")]
        #[fmt("`)`")]
        RParen,
        #[literal("ASSIGN")]
        #[fmt("`=`")]
        Assign,
        #[literal("SEMI")]
        #[fmt("`;`")]
        Semi,
    },
}

/// Token value: numbers are parsed during classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CalcRules;

impl Rules for CalcRules {
    type Kind = CalcKind;
    type Value = Value;

    fn catchable_patterns(&self) -> &[&str] {
        &[
            r"(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:e[+-]?[0-9]+)?",
            r"[a-z_][a-z0-9_]*",
            r"[-+*/()=;]",
        ]
    }

    fn non_catchable_patterns(&self) -> &[&str] {
        &[r"\s+", r"#[^\n]*"]
    }

    fn classify(&self, text: &str) -> Classified<CalcKind, Value> {
        let kind = match text {
            "+" => CalcKind::Plus,
            "-" => CalcKind::Minus,
            "*" => CalcKind::Star,
            "/" => CalcKind::Slash,
            "(" => CalcKind::LParen,
            ")" => CalcKind::RParen,
            "=" => CalcKind::Assign,
            ";" => CalcKind::Semi,
            _ => {
                if let Ok(number) = text.parse::<f64>() {
                    if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                        return Classified::new(CalcKind::Number)
                            .with_value(Value::Number(number));
                    }
                }
                if text.starts_with(|c: char| c.is_alphabetic() || c == '_') {
                    CalcKind::Ident
                } else {
                    return Classified::unknown();
                }
            }
        };
        Classified::new(kind)
    }
}

pub type CalcStream = TokenStream<CalcKind, Value>;

pub fn scanner() -> Scanner<CalcRules> {
    Scanner::new(CalcRules)
}

/// Renders one line per token: location, qualified literal and source
/// text. Unrecognised tokens show as `?`.
pub fn render_tokens(input: &str) -> String {
    let scanner = scanner();
    let stream = scanner.tokenize(input);

    stream
        .iter()
        .map(|token| {
            let literal = match token.kind() {
                Some(kind) => scanner.literal(kind, true).to_string(),
                None => "?".to_string(),
            };
            format!(
                "{} {} `{}`",
                stream.context().locate_token(token),
                literal,
                stream.slice(token)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
