//! Module for representing S-exps.
//!
//! The empty list is not a Sexp: every slot that may hold the empty list is an
//! Option<HeapSexp>, with None standing for `()`.

use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use super::cons::Cons;
use super::fmt_io_adapter::FmtIoAdapter;
use crate::primitive::Primitive;


/// S-exp on the heap.
///
/// Cells are shared rather than copied: quoting hands out the very sub-tree
/// that was read, and list builtins reuse elements of their arguments. No
/// builtin mutates a cell, so the graph is acyclic and plain reference
/// counting reclaims it.
pub type HeapSexp = Rc<Sexp>;

#[derive(Clone, PartialEq)]
pub enum Sexp {
    Primitive(Primitive),
    Cons(Cons),
}

/// Walks a list, yielding (element, from_cons).
///
/// If from_cons is false, the element is the non-list tail of an improper
/// list (or a lone non-list value) rather than the car of a Cons; it is
/// necessarily the last element.
pub struct SexpIter<'a> {
    current: Option<&'a HeapSexp>,
}


impl<'a> SexpIter<'a> {
    pub fn new(list: Option<&'a HeapSexp>) -> Self {
        Self { current: list }
    }
}

impl<'a> Iterator for SexpIter<'a> {
    type Item = (Option<&'a HeapSexp>, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let sexp = self.current?;
        match &**sexp {
            Sexp::Cons(cons) => {
                self.current = cons.cdr();
                Some((cons.car(), true))
            }
            Sexp::Primitive(_) => {
                self.current = None;
                Some((Some(sexp), false))
            }
        }
    }
}


/// Writes value in canonical S-exp syntax.
///
/// Without brackets, a list is written as its space-separated elements, which
/// is how tails are written inside an enclosing list. Tails are walked
/// iteratively; only element nesting recurses.
pub fn write_list<W, F, P>(
    w: &mut W,
    value: Option<&Sexp>,
    depth: usize,
    with_brackets: bool,
    write_primitive: &mut F,
    write_paren: &mut P,
) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, &Primitive, usize) -> io::Result<()>,
    P: FnMut(&mut W, &str, usize) -> io::Result<()>,
{
    let mut cons = match value {
        None => {
            write_paren(w, "(", depth)?;
            return write_paren(w, ")", depth);
        }
        Some(Sexp::Primitive(primitive)) => return write_primitive(w, primitive, depth),
        Some(Sexp::Cons(cons)) => cons,
    };

    if with_brackets {
        write_paren(w, "(", depth)?;
    }
    loop {
        write_list(
            w,
            cons.car().map(|car| &**car),
            depth + 1,
            true,
            write_primitive,
            write_paren,
        )?;
        match cons.cdr().map(|cdr| &**cdr) {
            None => break,
            Some(Sexp::Cons(next)) => {
                write!(w, " ")?;
                cons = next;
            }
            Some(Sexp::Primitive(primitive)) => {
                write!(w, " . ")?;
                write_primitive(w, primitive, depth + 1)?;
                break;
            }
        }
    }
    if with_brackets {
        write_paren(w, ")", depth)?;
    }
    Ok(())
}

/// Canonical text of value; None renders as `()`.
pub fn render(value: Option<&HeapSexp>, with_brackets: bool) -> String {
    let mut out = String::new();
    let res = write_plain(&mut FmtIoAdapter::new(&mut out), value.map(|v| &**v), with_brackets);
    // Writing into a String only fails if the printer itself does.
    debug_assert!(res.is_ok(), "rendering failed: {:?}", res);
    out
}

fn write_plain<W: Write>(w: &mut W, value: Option<&Sexp>, with_brackets: bool) -> io::Result<()> {
    write_list(
        w,
        value,
        0,
        with_brackets,
        &mut |writer, primitive, _depth| write!(writer, "{}", primitive),
        &mut |writer, paren, _depth| write!(writer, "{}", paren),
    )
}


impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match write_plain(&mut FmtIoAdapter::new(f), Some(self), true) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}


// From<T> impls.
impl From<Primitive> for Sexp {
    fn from(primitive: Primitive) -> Self {
        Sexp::Primitive(primitive)
    }
}

impl From<Primitive> for HeapSexp {
    fn from(primitive: Primitive) -> Self {
        HeapSexp::new(Sexp::Primitive(primitive))
    }
}

impl From<Cons> for Sexp {
    fn from(cons: Cons) -> Self {
        Sexp::Cons(cons)
    }
}

impl From<Cons> for HeapSexp {
    fn from(cons: Cons) -> Self {
        HeapSexp::new(Sexp::Cons(cons))
    }
}

impl From<bool> for Sexp {
    fn from(state: bool) -> Self {
        Sexp::Primitive(Primitive::Bool(state))
    }
}


#[cfg(test)]
#[path = "./sexp_test.rs"]
mod sexp_test;
