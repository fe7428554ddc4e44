use tracing::debug;
use crate::check::{CheckRequest, CriticalMode, DEFAULT_TARGET};
use crate::parser::ParserError;
use crate::parser::{Lexer, Token};


/// A parser for the `nAL[C|G][m][(x|*)p]` check notation.
///
/// The whole input must match: a command followed by anything else is rejected
/// with [`ParserError::TrailingInput`].
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    current_start: usize,
    peek_start: usize
}

impl Parser {
    /// Creates a new `Parser` instance for the given input string.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`ParserError::Empty`] for blank input, or any error raised
    /// while reading the first two tokens.
    ///
    /// # Examples
    /// ```
    /// use alsetto::{Parser, ParserError};
    ///
    /// assert!(Parser::new("5AL").is_ok());
    ///
    /// let empty_parser_result = Parser::new("  ").unwrap_err();
    /// assert!(matches!(empty_parser_result.err(), ParserError::Empty));
    /// ```
    pub fn new(input: &str) -> Result<Self, ParserError> {
        let mut lexer = Lexer::new(input.trim());
        let current = lexer.next_token()?;

        if current == Token::Eof {
            return Err(ParserError::Empty);
        }

        let peek_start = lexer.position;
        let peek = lexer.next_token()?;
        Ok(Self { lexer, current, peek, current_start: 0, peek_start })
    }

    /// Parses the input into a [`CheckRequest`].
    ///
    /// # Errors
    /// Returns a `ParserError` wrapped with [`ParserError::AtPosition`] if the
    /// input does not follow the notation, if the dice count or target is 0,
    /// or if anything follows the command. The position is the start of the
    /// offending token.
    ///
    /// # Examples
    /// ```
    /// use alsetto::{CriticalMode, Parser, ParserError};
    ///
    /// let check = Parser::new("6ALG2*4").unwrap().parse().unwrap();
    /// assert_eq!(check.dice_count(), 6);
    /// assert_eq!(check.mode(), CriticalMode::Gunslinger);
    /// assert_eq!(check.target(), 2);
    /// assert_eq!(check.damage(), 4);
    ///
    /// let err = Parser::new("5AL3x").unwrap().parse().unwrap_err();
    /// assert!(matches!(err.err(), ParserError::UnexpectedToken { .. }));
    /// ```
    pub fn parse(&mut self) -> Result<CheckRequest, ParserError> {
        self.parse_check()
            .map_err(|err| err.at_pos(self.peek_start))
    }

    fn next_token(&mut self) -> Result<(), ParserError> {
        self.current = self.peek;
        self.current_start = self.peek_start;
        self.peek_start = self.lexer.position;
        self.peek = self.lexer.next_token()?;

        Ok(())
    }

    fn parse_check(&mut self) -> Result<CheckRequest, ParserError> {
        let dice_count = match self.current {
            Token::Number(n) => n,
            found => {
                let err = ParserError::UnexpectedToken { found, expected: "dice count" };
                return Err(err.at_pos(self.current_start));
            }
        };

        if self.peek != Token::Check {
            return Err(ParserError::UnexpectedToken { found: self.peek, expected: "AL" });
        }
        self.next_token()?;

        let mode = self.parse_mode()?;
        let target = self.parse_target()?;
        let damage = self.parse_damage()?;

        if self.peek != Token::Eof {
            return Err(ParserError::TrailingInput(self.peek));
        }

        CheckRequest::builder(dice_count)
            .mode(mode)
            .target(target)
            .damage(damage)
            .build()
            .map_err(|err| ParserError::Check(Box::new(err)))
    }

    fn parse_mode(&mut self) -> Result<CriticalMode, ParserError> {
        let mode = match self.peek {
            Token::NoTriumph => CriticalMode::NoTriumph,
            Token::Gunslinger => CriticalMode::Gunslinger,
            _ => return Ok(CriticalMode::Standard)
        };

        self.next_token()?;
        Ok(mode)
    }

    fn parse_target(&mut self) -> Result<u16, ParserError> {
        match self.peek {
            Token::Number(target) => {
                self.next_token()?;
                Ok(target)
            },
            _ => Ok(DEFAULT_TARGET)
        }
    }

    fn parse_damage(&mut self) -> Result<u16, ParserError> {
        if self.peek != Token::Times {
            return Ok(0);
        }
        self.next_token()?;

        match self.peek {
            Token::Number(damage) => {
                self.next_token()?;
                Ok(damage)
            },
            found => Err(ParserError::UnexpectedToken { found, expected: "attack power" })
        }
    }
}


/// Parses a check command, returning `None` when the input is not a check.
///
/// A `None` is not an error: it tells the caller to try its other command handlers.
/// The reason for the rejection is logged at `debug` level.
///
/// # Examples
/// ```
/// use alsetto::{parse_command, CriticalMode};
///
/// let check = parse_command("8ALC4x5").unwrap();
/// assert_eq!(check.mode(), CriticalMode::NoTriumph);
/// assert_eq!(check.target(), 4);
/// assert_eq!(check.damage(), 5);
///
/// assert!(parse_command("AL5").is_none());
/// assert!(parse_command("0AL").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<CheckRequest> {
    match parse_check(input) {
        Ok(check) => Some(check),
        Err(err) => {
            debug!(input, %err, "not a check command");
            None
        }
    }
}


/// Parses a check command, keeping the reason for a rejection.
///
/// # Errors
/// Returns a `ParserError` describing why `input` is not a valid check.
/// Get a reference to the wrapped error with [`ParserError::err()`] and the
/// position at which it was found with [`ParserError::pos()`].
pub fn parse_check(input: &str) -> Result<CheckRequest, ParserError> {
    let mut parser = Parser::new(input)?;
    parser.parse()
}
