//! # Tally CLI Application
//!
//! Terminal host for the calculator engine. Reads whitespace-separated
//! keypad labels from stdin (the same labels the button grid shows), applies
//! each press, and reprints the display - one `CalculatorState`, owned here,
//! threaded through the input loop exactly as a GUI host would thread it
//! through its event loop.
//!
//! ## Status
//!
//! Plain stdin/stdout for now. A Ratatui keypad TUI is planned once the
//! engine surface settles.

use std::io::{self, BufRead, Write};

use calc_core::{Button, CalculatorState, ERROR_INDICATOR, STANDARD_LAYOUT};

fn print_keypad() {
    for row in STANDARD_LAYOUT {
        for button in row {
            print!("[{:^3}]", button.label());
        }
        println!();
    }
}

fn main() {
    println!("Tally CLI - Desktop Calculator");
    println!("==============================");
    println!();
    println!("Type button labels separated by spaces, e.g.: 7 + 8 =");
    println!("Keypad:");
    print_keypad();
    println!();
    println!("Commands: 'state' dumps the engine state as JSON, 'quit' exits.");
    println!();

    let mut state = CalculatorState::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        match line {
            "quit" | "exit" => break,
            "state" => {
                if let Ok(json) = serde_json::to_string_pretty(&state) {
                    println!("{}", json);
                }
                continue;
            }
            _ => {}
        }

        for label in line.split_whitespace() {
            if let Err(e) = state.apply_label(label) {
                eprintln!("Error: {}", e);
                if let Ok(json) = serde_json::to_string(&e) {
                    eprintln!("Error JSON: {}", json);
                }
            }
        }

        println!("  {}", state.display());
        if state.display() == ERROR_INDICATOR {
            println!("  (press {} to resume)", Button::Clear.label());
        }
    }
}
