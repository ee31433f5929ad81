use std::{env, process};

use monkey::repl;

fn main() {
    println!(
        "Hello {}! This is the Monkey programming language!",
        username()
    );

    if let Err(error) = repl::start() {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| String::from("unknown"))
}
