pub mod config;
mod error;
pub mod kind;
mod resolver;
mod rules;
pub mod scanner;
pub mod split;
pub mod stream;
mod span;
mod token;

pub use config::MatchMode;
pub use error::Error;
pub use kind::{Kind, Literal, LiteralTable};
pub use resolver::{Location, PositionResolver};
pub use rules::{Classified, Rules};
pub use scanner::Scanner;
pub use span::Span;
pub use stream::TokenStream;
pub use token::Token;
