use super::*;

use crate::error::Category;
use crate::parser::read_str;
use crate::primitive::Number;
use crate::sexp::render;


fn form(text: &str) -> HeapSexp {
    read_str(text).unwrap().unwrap()
}

fn eval_text(text: &str) -> Ret {
    eval(&form(text))
}

#[test]
fn atoms_are_self_evaluating() {
    assert_eq!(*eval_text("42").unwrap().unwrap(), Sexp::from(Number::new(42)));
    assert_eq!(*eval_text("#f").unwrap().unwrap(), Sexp::from(false));
}

#[test]
fn atoms_are_shared() {
    let atom = form("7");
    let res = eval(&atom).unwrap().unwrap();
    assert!(HeapSexp::ptr_eq(&atom, &res));
}

#[test]
fn symbols_resolve_to_builtins() {
    let res = eval_text("car").unwrap();
    assert_eq!(render(res.as_ref(), true), "[BUILTIN_car]");
}

#[test]
fn unbound_symbol() {
    let err = eval_text("frobnicate").unwrap_err();
    assert_eq!(err.category(), Category::Runtime);
    assert_eq!(
        err.to_string(),
        "RuntimeError: Unbound symbol: \"frobnicate\""
    );
}

#[test]
fn application() {
    let res = eval_text("(+ 1 (* 2 3))").unwrap();
    assert_eq!(render(res.as_ref(), true), "7");
}

#[test]
fn not_a_procedure() {
    let err = eval_text("(1 2)").unwrap_err();
    assert_eq!(err.category(), Category::Runtime);
    assert_eq!(err.to_string(), "RuntimeError: not a function: 1");

    let err = eval_text("(#t)").unwrap_err();
    assert_eq!(err.to_string(), "RuntimeError: not a function: #t");
}

#[test]
fn empty_head() {
    let err = eval_text("(() 1)").unwrap_err();
    assert_eq!(err.category(), Category::Runtime);
}

#[test]
fn evlis_rejects_improper_lists() {
    let args = form("(1 2 . 3)");
    assert!(evlis(Some(&args)).is_err());

    let args = form("(1 () 3)");
    assert!(evlis(Some(&args)).is_err());
}

#[test]
fn evlis_evaluates_in_order() {
    let args = form("(1 (+ 1 1) 3)");
    let vals = evlis(Some(&args)).unwrap();
    let rendered: Vec<String> = vals.iter().map(|v| render(v.as_ref(), true)).collect();
    assert_eq!(rendered, vec!["1", "2", "3"]);

    assert!(evlis(None).unwrap().is_empty());
}

#[test]
fn raw_list_keeps_tail() {
    let list = form("(a (b) . c)");
    let elems = raw_list(Some(&list));
    let rendered: Vec<String> = elems.iter().map(|v| render(v.as_ref(), true)).collect();
    assert_eq!(rendered, vec!["a", "(b)", "c"]);

    let atom = form("5");
    assert_eq!(raw_list(Some(&atom)).len(), 1);
    assert!(raw_list(None).is_empty());
}
