use derive_getters::Getters;
use std::fmt;

use crate::primitive::Primitive;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Quote,
    Period,
    Primitive(Primitive),
}

/// Token along with the 0-based position of its first character.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Token {
    kind: TokenKind,
    line: usize,
    col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, col: usize) -> Self {
        Self { kind, line, col }
    }
}


impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Quote => write!(f, "'"),
            TokenKind::Period => write!(f, "."),
            TokenKind::Primitive(p) => write!(f, "{}", p),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" @ ({}, {})", self.kind, self.line, self.col)
    }
}
