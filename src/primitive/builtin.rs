//! Representation of builtin procedures.

use std::fmt;

use crate::error::Error;
use crate::sexp::HeapSexp;


/// Unevaluated argument list of a call: the cdr of the calling form.
pub type Args<'a> = Option<&'a HeapSexp>;
pub type Ret = Result<Option<HeapSexp>, Error>;

#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    fun: fn(Args) -> Ret,
}

impl BuiltIn {
    pub fn new(name: &'static str, fun: fn(Args) -> Ret) -> BuiltIn {
        BuiltIn { name, fun }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: Args) -> Ret {
        (self.fun)(args)
    }
}

impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{} @ {:p}]", self.name, &self.fun)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


impl_try_from!(BuiltIn => BuiltIn);
