//! Evaluation and application of S-exps.
//!
//! Applying a procedure hands it the unevaluated argument list; each builtin
//! decides which arguments to evaluate, and when. Quoting and short-circuiting
//! need no special-form layer as a result.

use log::{debug, trace};
use std::convert::TryFrom;

use crate::builtins;
use crate::error::Error;
use crate::primitive::{Args, BuiltIn, Primitive, Ret};
use crate::sexp::{HeapSexp, Sexp, SexpIter};


pub fn eval(form: &HeapSexp) -> Ret {
    trace!("eval {}", form);
    match &**form {
        Sexp::Primitive(Primitive::Symbol(symbol)) => match builtins::lookup(symbol.as_str()) {
            Some(builtin) => Ok(Some(Primitive::BuiltIn(builtin).into())),
            None => {
                debug!("Unbound symbol \"{}\"", symbol);
                err!(UnboundSymbol(symbol.clone()))
            }
        },
        // Atoms are immutable, so sharing the node is as good as a copy.
        Sexp::Primitive(_) => Ok(Some(form.clone())),
        Sexp::Cons(cons) => {
            let car = match cons.car() {
                Some(car) => car,
                None => return err!(InvalidSexp(Some(form.clone()))),
            };
            let procedure = eval(car)?;
            apply(procedure.as_ref(), cons.cdr())
        }
    }
}

pub fn apply(procedure: Option<&HeapSexp>, args: Args) -> Ret {
    match <&BuiltIn>::try_from(procedure) {
        Ok(builtin) => {
            trace!("apply {} to {:?}", builtin, args);
            builtin.call(args)
        }
        Err(original) => err!(NotAProcedure(original.cloned())),
    }
}

/// Evaluates each element of a proper argument list, in order.
///
/// Every link of the chain must be a Cons: an improper argument list is
/// rejected outright, as is an element that is the empty list.
pub fn evlis(args: Args) -> Result<Vec<Option<HeapSexp>>, Error> {
    let mut res = Vec::new();
    for (arg, from_cons) in SexpIter::new(args) {
        if !from_cons {
            return err!(InvalidSexp(args.cloned()));
        }
        match arg {
            Some(arg) => res.push(eval(arg)?),
            None => return err!(InvalidSexp(None)),
        }
    }
    Ok(res)
}

/// Elements of a list as-is, unevaluated.
///
/// The non-list tail of an improper list is kept as the final element; a
/// non-list value yields itself as the only element.
pub fn raw_list(list: Option<&HeapSexp>) -> Vec<Option<HeapSexp>> {
    SexpIter::new(list).map(|(elem, _)| elem.cloned()).collect()
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
