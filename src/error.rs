//! Representation of errors raised while reading or evaluating an expression.
//!
//! General error mechanism that can use any ErrorKind. Every kind belongs to
//! exactly one Category, which is what callers should match on when they need
//! to tell bad syntax, bad computation and bad references apart.

use dyn_clone::DynClone;
use std::fmt;


#[derive(Clone, Debug)]
pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Display + fmt::Debug + DynClone {
    fn category(&self) -> Category;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Syntax,
    Runtime,
    Name,
}


impl Error {
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

impl PartialEq for Error {
    /// Compare category and reason.
    fn eq(&self, other: &Self) -> bool {
        self.category() == other.category() && self.kind.to_string() == other.kind.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Syntax => write!(f, "SyntaxError"),
            Category::Runtime => write!(f, "RuntimeError"),
            Category::Name => write!(f, "NameError"),
        }
    }
}

impl std::error::Error for Error {}

dyn_clone::clone_trait_object!(ErrorKind);
