use std::io::{self, BufRead, Write};

use clap::Parser;
use numeval::evaluate;

/// numeval is an interactive calculator for arithmetic expressions with
/// trigonometric functions, named constants and degree-mode arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the shell.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(value) => println!("{value:.6}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    run_shell();
}

/// Runs the interactive read-evaluate-print loop.
///
/// Reads one expression per line, prints the result to 6 decimal places and
/// keeps going on errors. The loop terminates on a case-insensitive `exit` or
/// on end of input.
fn run_shell() {
    println!("Welcome to numeval!");
    println!("Operators: +, -, *, /, ^ (power)");
    println!("Functions: sin(x), cos(x), tan(x), sqrt(x), log(x), exp(x)");
    println!("Constants: pi, e");
    println!("Degrees: sin(90deg), cos(180deg), tan(45deg)");
    println!("Examples: sin(pi/2), exp(1), sqrt(16), log(10), sin(90deg)");
    println!("Type 'exit' to quit.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }

        let input = line.trim();

        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        if input.is_empty() {
            println!("Empty input. Try again.");
            continue;
        }

        match evaluate(input) {
            Ok(value) => println!("{input} = {value:.6}"),
            Err(e) => println!("Error: {e}"),
        }
    }

    println!("Goodbye!");
}
