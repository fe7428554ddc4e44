use crate::parser::ParserError as ParserError;


#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Entropy source returned {got} dice, expected {expected}")]
    DiceCount { expected: u16, got: usize },

    #[error("Entropy source returned face {face}, expected 1..={faces}")]
    Entropy { face: u16, faces: u16 },

    #[error("Zero value not allowed")]
    ZeroValue,

    #[error("Parser error - {0}")]
    ParserError(#[from] ParserError)
}
