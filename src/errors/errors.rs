use rustyline::error::ReadlineError;
use thiserror::Error;

// The lexer itself never fails: unrecognised characters come back in-band
// as ILLEGAL tokens. Only the interactive surface has failure modes.
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("failed to read input line: {0}")]
    Readline(#[from] ReadlineError),
}
