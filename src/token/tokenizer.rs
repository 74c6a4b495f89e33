//! Module for breaking program text into tokens.
//!
//! Scanning is lazy: the Tokenizer holds exactly one token of lookahead and
//! scans the next one only when advanced.

use derive_getters::Getters;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use super::token::{Token, TokenKind};
use crate::error::{Category, Error, ErrorKind};
use crate::primitive::{Number, Primitive, Symbol, SymbolError};


pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    col: usize,

    current: Option<Token>,
    depth: usize,
    started_quote: bool,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenizeErrorKind {
    UnexpectedChar(char),
    // `#` followed by something other than t or f; None at end of input.
    InvalidBoolean(Option<char>),
    InvalidSymbol(SymbolError),
}


impl<'a> Tokenizer<'a> {
    /// Creates a Tokenizer positioned at the first token of input.
    pub fn new(input: &'a str) -> Result<Self, TokenizeError> {
        let mut tokenizer = Self {
            chars: input.chars().peekable(),
            line: 0,
            col: 0,

            current: None,
            depth: 0,
            started_quote: false,
        };
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn current_kind(&self) -> Option<&TokenKind> {
        self.current.as_ref().map(|token| token.kind())
    }

    /// Drops the current token and scans the next one.
    pub fn advance(&mut self) -> Result<(), TokenizeError> {
        self.current = self.scan()?;
        if let Some(token) = &self.current {
            // Once a quote has been started, any following token completes it
            // as far as depth calculation goes.
            self.started_quote = false;
            match token.kind() {
                TokenKind::LeftParen => self.depth += 1,
                TokenKind::RightParen => self.depth = self.depth.saturating_sub(1),
                TokenKind::Quote => self.started_quote = true,
                _ => {}
            }
        }
        Ok(())
    }

    /// Brackets opened and not yet closed among the tokens scanned so far. A
    /// quote-mark still waiting for its expression counts as one level.
    pub fn depth(&self) -> usize {
        std::cmp::max(self.depth, self.started_quote as usize)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn scan(&mut self) -> Result<Option<Token>, TokenizeError> {
        while let Some(c) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }

        let (line, col) = (self.line, self.col);
        let c = match self.bump() {
            Some(c) => c,
            None => return Ok(None),
        };

        let kind = match c {
            '\'' => TokenKind::Quote,
            '.' => TokenKind::Period,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '*' | '/' => symbol(c.to_string(), line, col)?,
            '+' | '-' => match self.chars.peek().copied() {
                Some(next) if next.is_ascii_digit() => {
                    let magnitude = self.scan_digits(0);
                    if c == '-' {
                        number(magnitude.wrapping_neg())
                    } else {
                        number(magnitude)
                    }
                }
                _ => symbol(c.to_string(), line, col)?,
            },
            '0'..='9' => {
                let first = c as i64 - '0' as i64;
                number(self.scan_digits(first))
            }
            '#' => match self.bump() {
                Some('t') => TokenKind::Primitive(Primitive::Bool(true)),
                Some('f') => TokenKind::Primitive(Primitive::Bool(false)),
                other => {
                    return Err(TokenizeError {
                        line,
                        col,
                        kind: TokenizeErrorKind::InvalidBoolean(other),
                    });
                }
            },
            _ if Symbol::is_start_char(c) => {
                let mut name = c.to_string();
                while let Some(&next) = self.chars.peek() {
                    if !Symbol::is_continue_char(next) {
                        break;
                    }
                    name.push(next);
                    self.bump();
                }
                symbol(name, line, col)?
            }
            _ => {
                return Err(TokenizeError {
                    line,
                    col,
                    kind: TokenizeErrorKind::UnexpectedChar(c),
                });
            }
        };

        Ok(Some(Token::new(kind, line, col)))
    }

    // No overflow checking; values wrap like native fixed-width integers.
    fn scan_digits(&mut self, mut acc: i64) -> i64 {
        while let Some(digit) = self.chars.peek().and_then(|c| c.to_digit(10)) {
            acc = acc.wrapping_mul(10).wrapping_add(digit as i64);
            self.bump();
        }
        acc
    }
}

// Runs are delimited by character class; the name itself is checked by Symbol.
fn symbol(name: String, line: usize, col: usize) -> Result<TokenKind, TokenizeError> {
    match Symbol::new(name) {
        Ok(symbol) => Ok(TokenKind::Primitive(Primitive::Symbol(symbol))),
        Err(err) => Err(TokenizeError {
            line,
            col,
            kind: TokenizeErrorKind::InvalidSymbol(err),
        }),
    }
}

fn number(val: i64) -> TokenKind {
    TokenKind::Primitive(Primitive::Number(Number::new(val)))
}


impl ErrorKind for TokenizeError {
    fn category(&self) -> Category {
        Category::Syntax
    }
}

impl From<TokenizeError> for Error {
    fn from(err: TokenizeError) -> Self {
        Error::new(Box::new(err))
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenizeErrorKind::UnexpectedChar(c) => write!(f, "Unexpected character {:?}", c)?,
            TokenizeErrorKind::InvalidBoolean(Some(c)) => {
                write!(f, "Invalid boolean literal \"#{}\"", c)?
            }
            TokenizeErrorKind::InvalidBoolean(None) => write!(f, "Invalid boolean literal \"#\"")?,
            TokenizeErrorKind::InvalidSymbol(err) => write!(f, "Invalid symbol: {}", err)?,
        }
        write!(f, " @ ({}, {})", self.line, self.col)
    }
}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
