//! The global table of builtin procedures.
//!
//! The table is built once, on first lookup, and is read-only from then on.
//! Every builtin receives its argument list unevaluated, then handles its own
//! evaluation and checks its own arguments.

use lazy_static::lazy_static;

use std::borrow::Cow;
use std::collections::HashMap;
use std::convert::TryFrom;

use crate::error::Error;
use crate::interpreter::{eval, evlis, raw_list};
use crate::lang_error::ExpectedCount;
use crate::primitive::{Args, BuiltIn, Number, Primitive, Ret};
use crate::sexp::{Cons, ConsList, HeapSexp, Sexp};


macro_rules! builtins {
    [$($n:literal : $x:expr),+ $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn::new($n, $x));
            )+
            m
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "boolean?": boolean_p,
        "not": not,
        "and": and,
        "or": or,
        "quote": quote,
        "pair?": pair_p,
        "null?": null_p,
        "list?": list_p,
        "cons": cons,
        "car": car,
        "cdr": cdr,
        "list": list,
        "list-ref": list_ref,
        "list-tail": list_tail,
        "number?": number_p,
        "=": num_eq,
        ">": num_gt,
        "<": num_lt,
        ">=": num_ge,
        "<=": num_le,
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
        "max": max,
        "min": min,
        "abs": abs,
    ];
}

pub fn lookup(name: &str) -> Option<BuiltIn> {
    BUILTINS.get(name).copied()
}

pub fn names() -> impl Iterator<Item = &'static str> {
    let table: &'static HashMap<&'static str, BuiltIn> = &BUILTINS;
    table.keys().copied()
}


// Shared argument handling.

fn boolean(state: bool) -> Ret {
    Ok(Some(HeapSexp::new(state.into())))
}

fn is_false(val: &Option<HeapSexp>) -> bool {
    matches!(
        val.as_deref(),
        Some(Sexp::Primitive(Primitive::Bool(false)))
    )
}

fn eval_operand(operand: Option<&HeapSexp>) -> Ret {
    match operand {
        Some(operand) => eval(operand),
        None => err!(InvalidSexp(None)),
    }
}

/// Evaluated arguments, checked against the expected count.
fn eval_args(args: Args, expected: ExpectedCount) -> Result<Vec<Option<HeapSexp>>, Error> {
    let vals = evlis(args)?;
    expected.check(vals.len())?;
    Ok(vals)
}

/// The single unevaluated operand of a one-argument call.
fn operand(args: Args<'_>) -> Result<Option<&HeapSexp>, Error> {
    match <&Cons>::try_from(args) {
        Ok(cons) if cons.cdr().is_none() => Ok(cons.car()),
        Ok(_) | Err(None) => err!(WrongArgumentCount {
            given: raw_list(args).len(),
            expected: ExpectedCount::Exactly(1),
        }),
        Err(Some(_)) => err!(InvalidSexp(args.cloned())),
    }
}

/// The single operand of car/cdr, which must itself be a list expression.
///
/// Checked structurally, before anything is evaluated.
fn list_operand<'a>(procedure: &'static str, args: Args<'a>) -> Result<&'a HeapSexp, Error> {
    let cons = match <&Cons>::try_from(args) {
        Ok(cons) => cons,
        Err(_) => {
            return err!(InvalidReference {
                procedure,
                given: args.cloned(),
            });
        }
    };
    match cons.car() {
        Some(operand) if matches!(**operand, Sexp::Cons(_)) => {
            if cons.cdr().is_some() {
                return err!(WrongArgumentCount {
                    given: raw_list(args).len(),
                    expected: ExpectedCount::Exactly(1),
                });
            }
            Ok(operand)
        }
        other => err!(InvalidReference {
            procedure,
            given: other.cloned(),
        }),
    }
}

fn number(val: &Option<HeapSexp>) -> Result<Number, Error> {
    match <&Number>::try_from(val.as_ref()) {
        Ok(num) => Ok(*num),
        Err(given) => err!(InvalidArgument {
            given: given.cloned(),
            expected: Cow::Borrowed("a Number"),
        }),
    }
}

fn numbers(vals: &[Option<HeapSexp>]) -> Result<Vec<Number>, Error> {
    vals.iter().map(number).collect()
}

fn is_proper_list(mut val: Option<&HeapSexp>) -> bool {
    while let Some(sexp) = val {
        match &**sexp {
            Sexp::Cons(cons) => val = cons.cdr(),
            Sexp::Primitive(_) => return false,
        }
    }
    true
}


// Predicates & logic.

fn boolean_p(args: Args) -> Ret {
    let vals = eval_args(args, ExpectedCount::Exactly(1))?;
    boolean(matches!(
        vals[0].as_deref(),
        Some(Sexp::Primitive(Primitive::Bool(_)))
    ))
}

// Inspects its operand as written, without evaluating it.
fn not(args: Args) -> Ret {
    let operands = raw_list(args);
    ExpectedCount::Exactly(1).check(operands.len())?;
    boolean(is_false(&operands[0]))
}

fn and(args: Args) -> Ret {
    let mut last = None;
    let mut operands = raw_list(args).into_iter().peekable();
    if operands.peek().is_none() {
        return boolean(true);
    }
    for operand in operands {
        let val = eval_operand(operand.as_ref())?;
        if is_false(&val) {
            return boolean(false);
        }
        last = val;
    }
    Ok(last)
}

fn or(args: Args) -> Ret {
    for operand in raw_list(args) {
        let val = eval_operand(operand.as_ref())?;
        if !is_false(&val) {
            return Ok(val);
        }
    }
    boolean(false)
}

fn quote(args: Args) -> Ret {
    Ok(operand(args)?.cloned())
}

fn pair_p(args: Args) -> Ret {
    let vals = eval_args(args, ExpectedCount::Exactly(1))?;
    boolean(matches!(vals[0].as_deref(), Some(Sexp::Cons(_))))
}

fn null_p(args: Args) -> Ret {
    let vals = eval_args(args, ExpectedCount::Exactly(1))?;
    boolean(raw_list(vals[0].as_ref()).is_empty())
}

fn list_p(args: Args) -> Ret {
    let vals = eval_args(args, ExpectedCount::Exactly(1))?;
    boolean(is_proper_list(vals[0].as_ref()))
}

// Inspects its operand as written, without evaluating it.
fn number_p(args: Args) -> Ret {
    let operand = operand(args)?;
    boolean(<&Number>::try_from(operand).is_ok())
}


// Pairs & lists.

fn cons(args: Args) -> Ret {
    let mut vals = eval_args(args, ExpectedCount::AtMost(2))?.into_iter();
    match (vals.next(), vals.next()) {
        (None, _) => Ok(None),
        (Some(car), cdr) => Ok(Some(Cons::new(car, cdr.flatten()).into())),
    }
}

fn car(args: Args) -> Ret {
    let val = eval(list_operand("car", args)?)?;
    match raw_list(val.as_ref()).into_iter().next() {
        Some(first) => Ok(first),
        None => err!(InvalidArgument {
            given: None,
            expected: Cow::Borrowed("a non-empty list"),
        }),
    }
}

fn cdr(args: Args) -> Ret {
    let val = eval(list_operand("cdr", args)?)?;
    match <&Cons>::try_from(val.as_ref()) {
        Ok(cons) => Ok(cons.cdr().cloned()),
        Err(given) => err!(InvalidArgument {
            given: given.cloned(),
            expected: Cow::Borrowed("a pair"),
        }),
    }
}

fn list(args: Args) -> Ret {
    Ok(evlis(args)?.into_iter().collect::<ConsList>().release())
}

/// Elements of the list in vals[0] along with the index in vals[1], when the
/// index is at most limit past the last element.
fn indexed(vals: &[Option<HeapSexp>], limit: usize) -> Result<(Vec<Option<HeapSexp>>, usize), Error> {
    let index = number(&vals[1])?.as_i64();
    let elems = raw_list(vals[0].as_ref());
    match usize::try_from(index) {
        Ok(i) if i < elems.len() + limit => Ok((elems, i)),
        _ => err!(IndexOutOfRange {
            index,
            len: elems.len(),
        }),
    }
}

fn list_ref(args: Args) -> Ret {
    let vals = eval_args(args, ExpectedCount::Exactly(2))?;
    let (elems, i) = indexed(&vals, 0)?;
    Ok(elems[i].clone())
}

fn list_tail(args: Args) -> Ret {
    let vals = eval_args(args, ExpectedCount::Exactly(2))?;
    let (elems, i) = indexed(&vals, 1)?;
    Ok(elems.into_iter().skip(i).collect::<ConsList>().release())
}


// Numbers.

fn compare(args: Args, holds: fn(&Number, &Number) -> bool) -> Ret {
    let nums = numbers(&evlis(args)?)?;
    ExpectedCount::AtLeast(2).check(nums.len())?;
    boolean(nums.windows(2).all(|pair| holds(&pair[0], &pair[1])))
}

fn num_eq(args: Args) -> Ret {
    compare(args, |a, b| a == b)
}

fn num_gt(args: Args) -> Ret {
    compare(args, |a, b| a > b)
}

fn num_lt(args: Args) -> Ret {
    compare(args, |a, b| a < b)
}

fn num_ge(args: Args) -> Ret {
    compare(args, |a, b| a >= b)
}

fn num_le(args: Args) -> Ret {
    compare(args, |a, b| a <= b)
}

fn add(args: Args) -> Ret {
    let mut curr = Number::default();
    for num in numbers(&evlis(args)?)? {
        curr += num;
    }
    Ok(Some(curr.into()))
}

fn sub(args: Args) -> Ret {
    let nums = numbers(&evlis(args)?)?;
    ExpectedCount::AtLeast(2).check(nums.len())?;

    let mut curr = nums[0];
    for num in &nums[1..] {
        curr -= *num;
    }
    Ok(Some(curr.into()))
}

fn mul(args: Args) -> Ret {
    let mut curr = Number::new(1);
    for num in numbers(&evlis(args)?)? {
        curr *= num;
    }
    Ok(Some(curr.into()))
}

fn div(args: Args) -> Ret {
    let nums = numbers(&evlis(args)?)?;
    ExpectedCount::AtLeast(2).check(nums.len())?;

    let mut curr = nums[0];
    for num in &nums[1..] {
        curr = match curr.checked_div(*num) {
            Some(quotient) => quotient,
            None => return err!(DivisionByZero),
        };
    }
    Ok(Some(curr.into()))
}

fn max(args: Args) -> Ret {
    let nums = numbers(&evlis(args)?)?;
    match nums.into_iter().max() {
        Some(max) => Ok(Some(max.into())),
        None => err!(WrongArgumentCount {
            given: 0,
            expected: ExpectedCount::AtLeast(1),
        }),
    }
}

fn min(args: Args) -> Ret {
    let nums = numbers(&evlis(args)?)?;
    match nums.into_iter().min() {
        Some(min) => Ok(Some(min.into())),
        None => err!(WrongArgumentCount {
            given: 0,
            expected: ExpectedCount::AtLeast(1),
        }),
    }
}

fn abs(args: Args) -> Ret {
    let vals = eval_args(args, ExpectedCount::Exactly(1))?;
    Ok(Some(number(&vals[0])?.abs().into()))
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
