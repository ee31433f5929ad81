//! Error types for the interactive session.
//!
//! Scanning never fails as an operation, so the only error types here
//! cover the REPL surface, where reading from the terminal can fail.

pub mod errors;
