use super::*;

use crate::error::Category;
use crate::parser::read_str;
use crate::sexp::render;


fn run(text: &str) -> Result<String, Error> {
    let form = read_str(text)?.unwrap();
    Ok(render(eval(&form)?.as_ref(), true))
}

fn category(text: &str) -> Category {
    run(text).unwrap_err().category()
}

#[test]
fn table_has_every_procedure() {
    for name in [
        "boolean?", "not", "and", "or", "quote", "pair?", "null?", "list?", "cons", "car", "cdr",
        "list", "list-ref", "list-tail", "number?", "=", ">", "<", ">=", "<=", "+", "-", "*",
        "/", "max", "min", "abs",
    ] {
        assert_eq!(lookup(name).unwrap().name(), name);
    }
    assert_eq!(names().count(), 27);
    assert!(lookup("define").is_none());
}

#[test]
fn predicates() {
    assert_eq!(run("(boolean? #t)").unwrap(), "#t");
    assert_eq!(run("(boolean? (= 1 1))").unwrap(), "#t");
    assert_eq!(run("(boolean? 1)").unwrap(), "#f");
    assert_eq!(run("(pair? '(1 . 2))").unwrap(), "#t");
    assert_eq!(run("(pair? '())").unwrap(), "#f");
    assert_eq!(run("(null? '())").unwrap(), "#t");
    assert_eq!(run("(null? '(1))").unwrap(), "#f");
    assert_eq!(run("(list? '(1 2))").unwrap(), "#t");
    assert_eq!(run("(list? '())").unwrap(), "#t");
    assert_eq!(run("(list? '(1 . 2))").unwrap(), "#f");
    assert_eq!(run("(list? 3)").unwrap(), "#f");
}

#[test]
fn predicate_arity() {
    assert_eq!(category("(boolean? 1 2)"), Category::Runtime);
    assert_eq!(category("(pair?)"), Category::Runtime);
    assert_eq!(category("(null? 1 2)"), Category::Runtime);
}

#[test]
fn unevaluated_operands() {
    assert_eq!(run("(number? 5)").unwrap(), "#t");
    assert_eq!(run("(number? a)").unwrap(), "#f");
    assert_eq!(run("(number? (+ 1 2))").unwrap(), "#f");
    assert_eq!(run("(not #f)").unwrap(), "#t");
    assert_eq!(run("(not 3)").unwrap(), "#f");
    assert_eq!(category("(not)"), Category::Runtime);
}

#[test]
fn and_or() {
    assert_eq!(run("(and)").unwrap(), "#t");
    assert_eq!(run("(and 1 2)").unwrap(), "2");
    assert_eq!(run("(and 1 #f 2)").unwrap(), "#f");
    assert_eq!(run("(or)").unwrap(), "#f");
    assert_eq!(run("(or #f 2 3)").unwrap(), "2");
    assert_eq!(run("(or #f #f)").unwrap(), "#f");
}

#[test]
fn short_circuit() {
    assert_eq!(run("(and #f undefined)").unwrap(), "#f");
    assert_eq!(run("(or 1 undefined)").unwrap(), "1");
    assert!(run("(and #t undefined)").is_err());
}

#[test]
fn quote() {
    assert_eq!(run("(quote (1 . 2))").unwrap(), "(1 . 2)");
    assert_eq!(run("'sym").unwrap(), "sym");
    assert_eq!(category("(quote 1 2)"), Category::Runtime);
    assert_eq!(category("(quote)"), Category::Runtime);
}

#[test]
fn cons_forms() {
    assert_eq!(run("(cons)").unwrap(), "()");
    assert_eq!(run("(cons 1)").unwrap(), "(1)");
    assert_eq!(run("(cons 1 2)").unwrap(), "(1 . 2)");
    assert_eq!(run("(cons 1 '(2 3))").unwrap(), "(1 2 3)");
    assert_eq!(run("(cons '() '())").unwrap(), "(())");
    assert_eq!(category("(cons 1 2 3)"), Category::Runtime);
}

#[test]
fn car_cdr() {
    assert_eq!(run("(car '(1 2))").unwrap(), "1");
    assert_eq!(run("(cdr '(1 2))").unwrap(), "(2)");
    assert_eq!(run("(cdr '(1 . 2))").unwrap(), "2");
    assert_eq!(run("(cdr '(1))").unwrap(), "()");
    assert_eq!(run("(car (list (+ 1 1) 3))").unwrap(), "2");
}

#[test]
fn car_cdr_need_list_expression() {
    assert_eq!(category("(car 5)"), Category::Name);
    assert_eq!(category("(cdr x)"), Category::Name);
    assert_eq!(category("(car)"), Category::Name);
    assert_eq!(category("(car '(1) '(2))"), Category::Runtime);
    assert_eq!(category("(car '())"), Category::Runtime);
    assert_eq!(category("(cdr (+ 1 2))"), Category::Runtime);
}

#[test]
fn list_access() {
    assert_eq!(run("(list)").unwrap(), "()");
    assert_eq!(run("(list 1 (+ 1 1))").unwrap(), "(1 2)");
    assert_eq!(run("(list-ref '(a b c) 1)").unwrap(), "b");
    assert_eq!(run("(list-tail '(a b c) 1)").unwrap(), "(b c)");
    assert_eq!(run("(list-tail '(a b c) 3)").unwrap(), "()");

    let err = run("(list-ref '(a b c) 3)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "RuntimeError: Index out of range: index 3, length 3"
    );
    assert!(run("(list-ref '(a b c) -1)").is_err());
    assert!(run("(list-tail '(a b c) 4)").is_err());
    assert!(run("(list-ref '(a b c) 'x)").is_err());
}

#[test]
fn comparisons() {
    assert_eq!(run("(= 1 1 1)").unwrap(), "#t");
    assert_eq!(run("(< 1 2 3)").unwrap(), "#t");
    assert_eq!(run("(< 1 3 2)").unwrap(), "#f");
    assert_eq!(run("(>= 3 3 1)").unwrap(), "#t");
    assert_eq!(run("(<= 1 0)").unwrap(), "#f");
    assert_eq!(run("(> 2 1)").unwrap(), "#t");
    assert_eq!(category("(= 1)"), Category::Runtime);
    assert_eq!(category("(<)"), Category::Runtime);
    assert_eq!(category("(< 1 #t)"), Category::Runtime);
}

#[test]
fn arithmetic() {
    assert_eq!(run("(+)").unwrap(), "0");
    assert_eq!(run("(*)").unwrap(), "1");
    assert_eq!(run("(+ 1 2 3)").unwrap(), "6");
    assert_eq!(run("(- 10 1 2)").unwrap(), "7");
    assert_eq!(run("(* 2 3 4)").unwrap(), "24");
    assert_eq!(run("(/ 20 2 3)").unwrap(), "3");
    assert_eq!(run("(/ -7 2)").unwrap(), "-3");
    assert_eq!(run("(max 1 5 3)").unwrap(), "5");
    assert_eq!(run("(min 4 -2 3)").unwrap(), "-2");
    assert_eq!(run("(abs -5)").unwrap(), "5");
    assert_eq!(category("(- 1)"), Category::Runtime);
    assert_eq!(category("(max)"), Category::Runtime);
    assert_eq!(category("(+ 1 #t)"), Category::Runtime);
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(
        run("(+ 9223372036854775807 1)").unwrap(),
        "-9223372036854775808"
    );
    assert_eq!(
        run("(- -9223372036854775808 1)").unwrap(),
        "9223372036854775807"
    );
    assert_eq!(
        run("(* 4611686018427387904 2)").unwrap(),
        "-9223372036854775808"
    );
    assert_eq!(
        run("(/ -9223372036854775808 -1)").unwrap(),
        "-9223372036854775808"
    );
    assert_eq!(
        run("(abs -9223372036854775808)").unwrap(),
        "-9223372036854775808"
    );
}

#[test]
fn car_cdr_operand_checked_before_evaluation() {
    // An unbound operand would be a RuntimeError if it were evaluated first.
    assert_eq!(category("(car nope)"), Category::Name);
    assert_eq!(category("(cdr 1 2)"), Category::Name);
    assert_eq!(run("(car (cdr '(1 2 3)))").unwrap(), "2");
    assert_eq!(run("(cdr (cdr '(1 2 3)))").unwrap(), "(3)");
}

#[test]
fn division_by_zero() {
    let err = run("(/ 1 0)").unwrap_err();
    assert_eq!(err.to_string(), "RuntimeError: division by zero");
}
