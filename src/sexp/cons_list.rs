//! Module for constructing lists as S-exps front to back.
//!
//! Elements are collected first and linked when the list is released, since
//! shared cells cannot be mutated once handed out.

use crate::sexp::{Cons, HeapSexp};


#[derive(Debug, Default)]
pub struct ConsList {
    elems: Vec<Option<HeapSexp>>,
}

impl ConsList {
    pub fn new() -> ConsList {
        ConsList::default()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn append<T: Into<Option<HeapSexp>>>(&mut self, val: T) {
        self.elems.push(val.into());
    }

    /// Proper list of the appended elements; None if nothing was appended.
    pub fn release(self) -> Option<HeapSexp> {
        self.release_with_tail(None)
    }

    pub fn release_with_tail(self, tail: Option<HeapSexp>) -> Option<HeapSexp> {
        self.elems
            .into_iter()
            .rev()
            .fold(tail, |cdr, car| Some(Cons::new(car, cdr).into()))
    }
}

impl std::iter::FromIterator<Option<HeapSexp>> for ConsList {
    fn from_iter<I: IntoIterator<Item = Option<HeapSexp>>>(iter: I) -> Self {
        ConsList {
            elems: iter.into_iter().collect(),
        }
    }
}
