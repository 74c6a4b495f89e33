use log::debug;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use super::tokenizer::Tokenizer;


/// Reads lines until they form one complete expression, yielding its text.
pub struct CliStream {
    editor: Editor<CliHelper>,

    curr_expr: String,
}

impl CliStream {
    pub fn new() -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new()));

        CliStream {
            editor,

            curr_expr: String::default(),
        }
    }

    // Scan errors count as complete so that they get reported.
    fn pending_depth(&self) -> usize {
        let mut tokenizer = match Tokenizer::new(&self.curr_expr) {
            Ok(tokenizer) => tokenizer,
            Err(_) => return 0,
        };
        while !tokenizer.at_end() {
            if tokenizer.advance().is_err() {
                return 0;
            }
        }
        tokenizer.depth()
    }
}

impl Default for CliStream {
    fn default() -> Self {
        Self::new()
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let depth = self.pending_depth();
            if depth == 0 && !self.curr_expr.trim().is_empty() {
                let expr = std::mem::take(&mut self.curr_expr);
                self.editor.add_history_entry(expr.as_str());
                return Some(expr);
            }

            let line = if depth == 0 {
                self.curr_expr.clear();
                self.editor.readline("> ")
            } else {
                self.editor.readline(&format!("..{}", "  ".repeat(depth)))
            };

            match line {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr.push('\n');
                    }
                    self.curr_expr += &line;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    if depth > 0 {
                        // Enable ^C to cancel an expression mid-read.
                        debug!("Dropping partial expression {:?}", self.curr_expr);
                        self.curr_expr.clear();
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.curr_expr.clear();
                    continue;
                }
            }
        }
    }
}
