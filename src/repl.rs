use std::io::{self, BufRead, Write};

use crate::scanner::{ScanOptions, Scanner, drain, render_tokens};
use crate::scanner::token::Token;

/// Run the interactive token dumper. One scanner is re-armed for each line.
pub fn run_repl(options: ScanOptions) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut scanner = Scanner::new("");

    loop {
        print!("> ");
        if let Err(e) = stdout.flush() {
            eprintln!("write error: {e}");
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // Ctrl-D / EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.trim().is_empty() {
            continue;
        }

        let tokens = scan_line(&mut scanner, trimmed, options);
        print!("{}", render_tokens(&tokens));
    }
}

fn scan_line(scanner: &mut Scanner, line: &str, options: ScanOptions) -> Vec<Token> {
    scanner.initialize(line);
    drain(scanner, options)
}
