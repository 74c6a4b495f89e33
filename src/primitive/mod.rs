//! Representation of primitives.

use std::fmt;

#[macro_use]
mod try_from_helper;

pub mod builtin;
pub mod number;
pub mod symbol;

pub use self::builtin::{Args, BuiltIn, Ret};
pub use self::number::Number;
pub use self::symbol::{Symbol, SymbolError, SymbolResult};


#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Number(Number),
    Bool(bool),
    Symbol(Symbol),
    BuiltIn(BuiltIn),
}


impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Number(num) => write!(f, "{}", num),
            Primitive::Bool(true) => write!(f, "#t"),
            Primitive::Bool(false) => write!(f, "#f"),
            Primitive::Symbol(s) => write!(f, "{}", s),
            Primitive::BuiltIn(b) => write!(f, "{}", b),
        }
    }
}
