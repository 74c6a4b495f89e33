use std::convert::TryFrom;

use super::sexp::{HeapSexp, Sexp};


/// Pair of slots, either of which may be empty (the empty list).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cons {
    car: Option<HeapSexp>,
    cdr: Option<HeapSexp>,
}

impl Cons {
    pub fn new(car: Option<HeapSexp>, cdr: Option<HeapSexp>) -> Cons {
        Cons { car, cdr }
    }

    pub fn car(&self) -> Option<&HeapSexp> {
        self.car.as_ref()
    }

    pub fn cdr(&self) -> Option<&HeapSexp> {
        self.cdr.as_ref()
    }
}


// TryFrom<Sexp-like> impls.
impl<'a> TryFrom<&'a Sexp> for &'a Cons {
    type Error = &'a Sexp;

    fn try_from(value: &'a Sexp) -> Result<Self, Self::Error> {
        if let Sexp::Cons(cons) = value {
            Ok(cons)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<Option<&'a HeapSexp>> for &'a Cons {
    type Error = Option<&'a HeapSexp>;

    fn try_from(value: Option<&'a HeapSexp>) -> Result<Self, Self::Error> {
        if let Some(sexp) = value {
            if let Sexp::Cons(cons) = &**sexp {
                return Ok(cons);
            }
        }
        Err(value)
    }
}
