//! Small CLI for interactively inspecting how a free-form message parses.
//! Reads one message per line from stdin (or as CLI args joined by spaces)
//! and prints the resulting `ParsedMessage` as pretty JSON.

use std::io::{self, BufRead, Write};

use navlun_parser::parse_message;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        print_parse(&args.join(" "));
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        print_parse(&line);
        let _ = writeln!(out);
    }
}

fn print_parse(text: &str) {
    let parsed = parse_message(text);
    match serde_json::to_string_pretty(&parsed) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize parse of {text:?}: {e}"),
    }
}
