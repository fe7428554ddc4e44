use crate::Error as CheckError;
use crate::parser::Token;


#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    #[error("At position {0} - {1}")]
    AtPosition(usize, Box<ParserError>),

    #[error("Invalid token: {0}")]
    Token(char),

    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseIntError),

    #[error("Input string is empty")]
    Empty,

    #[error("Unexpected token {found:?}, expected {expected}")]
    UnexpectedToken { found: Token, expected: &'static str },

    #[error("Unexpected trailing input: {0:?}")]
    TrailingInput(Token),

    #[error("Invalid check - {0}")]
    Check(Box<CheckError>),
}

impl ParserError {
    pub fn err(&self) -> &Self {
        match self {
            ParserError::AtPosition(_, err) => err.as_ref(),
            other => other
        }
    }

    pub fn pos(&self) -> Option<&usize> {
        match self {
            ParserError::AtPosition(position, _) => Some(position),
            _ => None
        }
    }

    pub fn at_pos(self, position: usize) -> Self {
        match self {
            ParserError::AtPosition(_, _) => self,
            other => ParserError::AtPosition(position, Box::new(other))
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
