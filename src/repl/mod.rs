//! Interactive front end for the Monkey lexer.
//!
//! Reads one line at a time, scans it with a fresh lexer, and prints every
//! token up to the end-of-input marker. The literal line `exit` ends the
//! session, as does end of input on the terminal.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::errors::errors::ReplError;
use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::Token;

const PROMPT: &str = "monkey> ";

pub fn start() -> Result<(), ReplError> {
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim_end() == "exit" {
                    break;
                }

                let _ = editor.add_history_entry(&line);

                for token in scan_line(&line) {
                    println!("{}", token);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => return Err(ReplError::Readline(error)),
        }
    }

    Ok(())
}

fn scan_line(line: &str) -> Vec<Token> {
    Lexer::new(String::from(line)).collect()
}
