use super::*;

use crate::primitive::Number;
use crate::sexp::{render, Sexp};

fn read_render(text: &str) -> String {
    render(read_str(text).unwrap().as_ref(), true)
}

fn reason(text: &str) -> ParseErrorReason {
    let err = read_str(text).unwrap_err();
    assert_eq!(err.category(), Category::Syntax);
    // Tokenize errors are syntax errors too, but carry no reason.
    let rendered = err.kind().to_string();
    for reason in [
        UnexpectedEof,
        UnmatchedClose,
        LeadingPeriod,
        MissingClose,
        TrailingInput,
    ] {
        if rendered.starts_with(&reason.to_string()) {
            return reason;
        }
    }
    panic!("not a parse error: {}", rendered);
}

#[test]
fn atoms_round_trip() {
    for text in ["42", "-7", "#t", "#f", "foo", "list-tail", "+", "<="] {
        assert_eq!(read_render(text), text);
    }
}

#[test]
fn number_atom() {
    let sexp = read_str("  12 ").unwrap().unwrap();
    assert_eq!(*sexp, Sexp::from(Number::new(12)));
}

#[test]
fn proper_list() {
    assert_eq!(read_render("(1 2 3)"), "(1 2 3)");
    assert_eq!(read_render("( a  (b c)   d )"), "(a (b c) d)");
}

#[test]
fn empty_list() {
    assert_eq!(read_str("()").unwrap(), None);
    assert_eq!(read_render("(())"), "(())");
    assert_eq!(read_render("(() . ())"), "(())");
}

#[test]
fn dotted_list() {
    assert_eq!(read_render("(1 . 2)"), "(1 . 2)");
    assert_eq!(read_render("(1 2 . 3)"), "(1 2 . 3)");
    // A dotted list tail is spliced back into the list.
    assert_eq!(read_render("(1 . (2 3))"), "(1 2 3)");
}

#[test]
fn quote_expands() {
    assert_eq!(read_render("'a"), "(quote a)");
    assert_eq!(read_render("'(1 '2)"), "(quote (1 (quote 2)))");
    assert_eq!(read_render("'()"), "(quote ())");
}

#[test]
fn top_level_dot_reads_through() {
    assert_eq!(read_render(". 5"), "5");
}

#[test]
fn syntax_errors() {
    assert_eq!(reason(""), UnexpectedEof);
    assert_eq!(reason("("), UnexpectedEof);
    assert_eq!(reason("(1 2"), UnexpectedEof);
    assert_eq!(reason(")"), UnmatchedClose);
    assert_eq!(reason("'"), UnexpectedEof);
    assert_eq!(reason("(. 1)"), LeadingPeriod);
    assert_eq!(reason("(1 . 2 3)"), MissingClose);
    assert_eq!(reason("(1 . 2"), MissingClose);
    assert_eq!(reason("1 2"), TrailingInput);
    assert_eq!(reason("(1))"), TrailingInput);
}

#[test]
fn tokenize_errors_surface() {
    let err = read_str("(1 #x)").unwrap_err();
    assert_eq!(err.category(), Category::Syntax);
}
