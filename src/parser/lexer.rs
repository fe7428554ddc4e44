use crate::parser::error::*;


/// Tokens of the check notation. Letters are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(u16),
    /// The `AL` command keyword.
    Check,
    /// `C`: no triumph rerolls.
    NoTriumph,
    /// `G`: gunslinger triumphs on 1 or 2.
    Gunslinger,
    /// `x` or `*` introducing the attack power.
    Times,
    Eof,
}


#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    pub position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        if self.position >= self.input.len() {
            return Ok(Token::Eof);
        }

        let ch = self.input[self.position];

        match ch {
            '*' | 'x' | 'X' => {
                self.position += 1;
                Ok(Token::Times)
            }
            'c' | 'C' => {
                self.position += 1;
                Ok(Token::NoTriumph)
            }
            'g' | 'G' => {
                self.position += 1;
                Ok(Token::Gunslinger)
            }
            'a' | 'A' => self.read_keyword(),
            '0'..='9' => self.read_number(),
            _ => Err(ParserError::Token(ch))
        }
    }

    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;
        while self.position < self.input.len() && self.input[self.position].is_ascii_digit() {
            self.position += 1;
        }

        let number_str: String = self.input[start..self.position].iter().collect();
        let number: u16 = number_str.parse()?;

        Ok(Token::Number(number))
    }

    fn read_keyword(&mut self) -> Result<Token> {
        self.position += 1;

        match self.input.get(self.position) {
            Some('l' | 'L') => {
                self.position += 1;
                Ok(Token::Check)
            }
            Some(&other) => Err(ParserError::Token(other)),
            None => Err(ParserError::Token('A'))
        }
    }
}
