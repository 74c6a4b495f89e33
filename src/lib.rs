//! A small Scheme-like interpreter over integers, booleans and lists.
//!
//! Text is read into S-exps by the parser, then evaluated by applying builtin
//! procedures from a fixed global table. There are no user-defined bindings.
//!
//! Reading and evaluation recurse on nesting depth, so pathologically deep
//! input is bounded by the call stack rather than rejected with an Error.
//!
//! Note that this crate does *not* setup logging, clients should take care
//! of that. See: https://github.com/rust-lang/log#in-executables.

use log::debug;

use crate::error::Error;
use crate::sexp::{render, HeapSexp};


#[macro_use]
pub mod lang_error;

pub mod builtins;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod primitive;
pub mod sexp;
pub mod token;

pub mod prelude {
    pub use crate::error::{Category, Error, ErrorKind};
    pub use crate::interpreter::{apply, eval};
    pub use crate::lang_error::{ExpectedCount, LangError};
    pub use crate::parser::read_str;
    pub use crate::primitive::{BuiltIn, Number, Primitive, Symbol};
    pub use crate::sexp::{render, Cons, ConsList, HeapSexp, Sexp};
    pub use crate::{eval_str, run};
}


/// Reads and evaluates exactly one expression.
///
/// An input that is itself the empty list is void.
pub fn eval_str(text: &str) -> Result<Option<HeapSexp>, Error> {
    match parser::read_str(text)? {
        Some(form) => interpreter::eval(&form),
        None => err!(Void),
    }
}

/// Reads and evaluates text, rendering the result in canonical syntax.
pub fn run<S: AsRef<str>>(text: S) -> Result<String, Error> {
    let text = text.as_ref();
    debug!("Running \"{}\"", text);
    match eval_str(text) {
        Ok(val) => Ok(render(val.as_ref(), true)),
        Err(err) => {
            debug!("Run failed: {}", err);
            Err(err)
        }
    }
}
