//! CLI entry point for the `arith` tool.
//!
//! Positional arguments are joined with spaces into one expression whose
//! value is printed. Without arguments every non-blank line of standard input
//! is evaluated in turn. The exit status is non-zero if any evaluation fails.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use arith_eval::{Strategy, evaluate_with};
use clap::Parser;
use log::error;

#[derive(Debug, Parser)]
#[command(name = "arith", version, about = "Evaluate arithmetic expressions")]
struct Cli {
    /// Traversal strategy: recursive-descent or precedence-climbing.
    #[arg(long, short, default_value_t = Strategy::default())]
    strategy: Strategy,
    /// Expression to evaluate; read lines from stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let ok = if cli.expression.is_empty() {
        evaluate_lines(io::stdin().lock(), cli.strategy)
    } else {
        report(&cli.expression.join(" "), cli.strategy)
    };
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn evaluate_lines(input: impl BufRead, strategy: Strategy) -> bool {
    let mut ok = true;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read standard input: {err}");
                return false;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        ok &= report(&line, strategy);
    }
    ok
}

/// Print the value of `src` to stdout, or the fault to stderr.
fn report(src: &str, strategy: Strategy) -> bool {
    match evaluate_with(src, strategy) {
        Ok(value) => {
            let _ = writeln!(io::stdout(), "{value}");
            true
        }
        Err(err) => {
            let _ = writeln!(io::stderr(), "arith: {err}");
            false
        }
    }
}
