use lazy_static::lazy_static;
use regex::Regex;

use std::fmt;


/// Case-sensitive identifier naming a procedure.
///
/// Either one of the lone operator characters `+ - * /`, or a letter or one of
/// `< = >` followed by letters, digits, or any of `< = > * # ? ! -`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub type SymbolResult = Result<Symbol, SymbolError>;

#[derive(Clone, Debug, PartialEq)]
pub enum SymbolError {
    InvalidName(String),
}

impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> SymbolResult {
        lazy_static! {
            static ref NAME: Regex =
                Regex::new(r"^(?:[+\-*/]|[A-Za-z<=>][A-Za-z0-9<=>*#?!\-]*)$").unwrap();
        }

        let s = sym.as_ref();
        if NAME.is_match(s) {
            Ok(Symbol(s.to_string()))
        } else {
            Err(SymbolError::InvalidName(s.to_string()))
        }
    }

    // For names fixed in the crate itself, such as the quote expansion.
    pub(crate) fn from_static(name: &'static str) -> Symbol {
        Symbol(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    // `*` and `#` also open a name run, but the scanner claims both first.
    pub fn is_start_char(c: char) -> bool {
        c.is_ascii_alphabetic() || matches!(c, '<' | '=' | '>')
    }

    pub fn is_continue_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '<' | '=' | '>' | '*' | '#' | '?' | '!' | '-')
    }
}


impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::InvalidName(name) => write!(f, "invalid symbol name \"{}\"", name),
        }
    }
}


impl_try_from!(Symbol => Symbol);


#[cfg(test)]
#[path = "./symbol_test.rs"]
mod symbol_test;
