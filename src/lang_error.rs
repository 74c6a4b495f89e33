use std::borrow::Cow;
use std::fmt;

use crate::error::{Category, Error, ErrorKind};
use crate::primitive::Symbol;
use crate::sexp::{render, HeapSexp};


/// Creates an evaluation Error wrapped in Err.
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::from(
            $crate::lang_error::LangError::$($kind)+,
        ))
    };
}


#[derive(Clone, Debug, PartialEq)]
pub enum LangError {
    InvalidArgument {
        given: Option<HeapSexp>,
        expected: Cow<'static, str>,
    },
    InvalidSexp(Option<HeapSexp>),
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
    UnboundSymbol(Symbol),
    NotAProcedure(Option<HeapSexp>),
    DivisionByZero,
    IndexOutOfRange {
        index: i64,
        len: usize,
    },
    Void,
    // Call-site operand is not a list expression; raised before evaluation.
    InvalidReference {
        procedure: &'static str,
        given: Option<HeapSexp>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}


impl ExpectedCount {
    pub fn check(self, given: usize) -> Result<(), Error> {
        let ok = match self {
            Self::Exactly(n) => given == n,
            Self::AtLeast(n) => given >= n,
            Self::AtMost(n) => given <= n,
        };
        if ok {
            Ok(())
        } else {
            err!(WrongArgumentCount {
                given,
                expected: self,
            })
        }
    }
}


impl ErrorKind for LangError {
    fn category(&self) -> Category {
        match self {
            Self::InvalidReference { .. } => Category::Name,
            _ => Category::Runtime,
        }
    }
}

impl From<LangError> for Error {
    fn from(kind: LangError) -> Self {
        Error::new(Box::new(kind))
    }
}

impl fmt::Display for LangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { given, expected } => write!(
                f,
                "Invalid argument: given {}, expected {}",
                render(given.as_ref(), true),
                expected
            ),
            Self::InvalidSexp(val) => {
                write!(f, "Invalid S-exp for evaluation: {}", render(val.as_ref(), true))
            }
            Self::WrongArgumentCount { given, expected } => write!(
                f,
                "Wrong argument count: given {}, expected {}",
                given, expected
            ),
            Self::UnboundSymbol(symbol) => write!(f, "Unbound symbol: \"{}\"", symbol),
            Self::NotAProcedure(val) => write!(f, "not a function: {}", render(val.as_ref(), true)),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: index {}, length {}", index, len)
            }
            Self::Void => write!(f, "this is void"),
            Self::InvalidReference { procedure, given } => write!(
                f,
                "{} expects a list expression, given {}",
                procedure,
                render(given.as_ref(), true)
            ),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Self::Exactly(exactly) => write!(f, "{}", exactly),
            Self::AtLeast(minimum) => write!(f, "at least {}", minimum),
            Self::AtMost(maximum) => write!(f, "at most {}", maximum),
        };
    }
}
