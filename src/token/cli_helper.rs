use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::builtins;
use crate::primitive::Symbol;


// Rustyline Helper for CliStream; completes builtin names.
#[derive(Default)]
pub struct CliHelper {}

pub struct CliCandidate {
    name: &'static str,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {}
    }

    fn name_prefix(&self, prefix: &str) -> Vec<&'static str> {
        let mut res = builtins::names()
            .filter(|name| name.starts_with(prefix))
            .collect::<Vec<_>>();
        res.sort_unstable();
        res
    }

    fn word_start(&self, line: &str, pos: usize) -> usize {
        let mut start: usize = 0;
        for (i, c) in line[..pos].char_indices() {
            if !Symbol::is_continue_char(c) && !matches!(c, '+' | '/') {
                start = i + c.len_utf8();
            }
        }
        start
    }
}


impl Completer for CliHelper {
    type Candidate = CliCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let start = self.word_start(line, pos);
        let names = self.name_prefix(&line[start..pos]);
        Ok((
            start,
            names.into_iter().map(|name| CliCandidate { name }).collect(),
        ))
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = CliCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn replacement(&self) -> &str {
        self.name
    }
}

impl Hint for CliCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name)
    }
}
