mod error;
mod lexer;
mod parse;

#[cfg(test)]
pub(crate) mod str_test_strategies;

pub use error::ParserError;
pub(crate) use lexer::Lexer;
pub use lexer::Token;
pub use parse::{Parser, parse_check, parse_command};
