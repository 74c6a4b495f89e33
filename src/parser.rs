//! Module for reading tokens into S-exps.
//!
//! Recursive descent with one token of lookahead. Nesting depth is bounded
//! only by the call stack.

use log::debug;
use std::fmt;

use crate::error::{Category, Error, ErrorKind};
use crate::primitive::{Primitive, Symbol};
use crate::sexp::{Cons, HeapSexp};
use crate::token::{Token, TokenKind, Tokenizer};

use self::ParseErrorReason::*;

const QUOTE: &str = "quote";


/// Reads the whole of text as exactly one expression.
///
/// Returns None when the expression is the empty list.
pub fn read_str(text: &str) -> Result<Option<HeapSexp>, Error> {
    let mut tokenizer = Tokenizer::new(text)?;
    let sexp = read(&mut tokenizer)?;
    if let Some(token) = tokenizer.current() {
        return Err(parse_error(TrailingInput, Some(token)));
    }
    Ok(sexp)
}

/// Reads one expression, leaving the tokenizer at the token following it.
pub fn read(tokenizer: &mut Tokenizer) -> Result<Option<HeapSexp>, Error> {
    let token = match tokenizer.current() {
        Some(token) => token.clone(),
        None => return Err(parse_error(UnexpectedEof, None)),
    };
    tokenizer.advance()?;

    match token.kind() {
        TokenKind::LeftParen => read_list(tokenizer, true),
        TokenKind::RightParen => Err(parse_error(UnmatchedClose, Some(&token))),
        // Only reachable outside of list-tail position; reads through the dot.
        TokenKind::Period | TokenKind::Quote if tokenizer.at_end() => {
            Err(parse_error(UnexpectedEof, None))
        }
        TokenKind::Period => read(tokenizer),
        TokenKind::Quote => {
            let quoted = read(tokenizer)?;
            let quote = Primitive::Symbol(Symbol::from_static(QUOTE));
            let args = Cons::new(quoted, None);
            Ok(Some(Cons::new(Some(quote.into()), Some(args.into())).into()))
        }
        TokenKind::Primitive(primitive) => Ok(Some(primitive.clone().into())),
    }
}

/// Reads the elements of a list whose opening bracket is already consumed.
///
/// The closing bracket is consumed only when expect_close is set; inner calls
/// building the rest of a list leave it for the outermost one.
pub fn read_list(tokenizer: &mut Tokenizer, expect_close: bool) -> Result<Option<HeapSexp>, Error> {
    match tokenizer.current_kind() {
        None => return Err(parse_error(UnexpectedEof, None)),
        Some(TokenKind::Period) => {
            return Err(parse_error(LeadingPeriod, tokenizer.current()));
        }
        Some(TokenKind::RightParen) => {
            tokenizer.advance()?;
            return Ok(None);
        }
        _ => {}
    }

    let car = read(tokenizer)?;
    let cdr = match tokenizer.current_kind() {
        Some(TokenKind::Period) => read(tokenizer)?,
        Some(TokenKind::RightParen) => None,
        _ => read_list(tokenizer, false)?,
    };
    let list = Some(Cons::new(car, cdr).into());

    if !expect_close {
        return Ok(list);
    }
    match tokenizer.current_kind() {
        None => Err(parse_error(MissingClose, None)),
        Some(TokenKind::RightParen) => {
            tokenizer.advance()?;
            Ok(list)
        }
        Some(_) => Err(parse_error(MissingClose, tokenizer.current())),
    }
}

fn parse_error(reason: ParseErrorReason, token: Option<&Token>) -> Error {
    let err = ParseError {
        reason,
        token: token.cloned(),
    };
    debug!("{}", err);
    err.into()
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseErrorReason {
    UnexpectedEof,
    UnmatchedClose,
    LeadingPeriod,
    MissingClose,
    TrailingInput,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Option<Token>,
}

impl ParseError {
    pub fn reason(&self) -> ParseErrorReason {
        self.reason
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}

impl ErrorKind for ParseError {
    fn category(&self) -> Category {
        Category::Syntax
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(Box::new(err))
    }
}

impl fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnexpectedEof => write!(f, "Unexpected end of input"),
            UnmatchedClose => write!(f, "Unmatched closing bracket"),
            LeadingPeriod => write!(f, "List cannot start with a dot"),
            MissingClose => write!(f, "Expected closing bracket"),
            TrailingInput => write!(f, "Unexpected input after expression"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "{}: {}", self.reason, token),
            None => write!(f, "{}", self.reason),
        }
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
