//! Basic REPL over the builtin procedures.
//!
//! Run interactively as:       `RUST_LOG=debug cargo run --example repl`.
//! Evaluate and exit as:       `cargo run --example repl -- -e '(+ 1 2)'`.

use clap::{Arg, Command};
use log::LevelFilter;
use std::process;

use schemer::error::Error;
use schemer::sexp::color::print_colored;
use schemer::sexp::{render, HeapSexp};
use schemer::token::cli_stream::CliStream;


fn main() {
    // Setup logging.
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = Command::new("Cli schemer REPL")
        .version("0.1")
        .about("Reads, evaluates and prints expressions over the builtin procedures")
        .arg(
            Arg::new("expr")
                .short('e')
                .long("expr")
                .value_name("EXPR")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Evaluate EXPR and print its result; may be repeated"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print results without colored brackets"),
        )
        .get_matches();
    let color = !matches.is_present("no-color");

    if let Some(exprs) = matches.values_of("expr") {
        let mut failed = false;
        for expr in exprs {
            let result = schemer::eval_str(expr);
            failed |= result.is_err();
            print_result(&result, color);
        }
        if failed {
            process::exit(1);
        }
        return;
    }

    for expr in CliStream::new() {
        print_result(&schemer::eval_str(&expr), color);
    }
}

fn print_result(result: &Result<Option<HeapSexp>, Error>, color: bool) {
    match result {
        Ok(val) => {
            print!("-> ");
            if color {
                print_colored(val.as_ref());
            } else {
                print!("{}", render(val.as_ref(), true));
            }
            println!();
        }
        Err(err) => println!("{}", err),
    };
    println!();
}
