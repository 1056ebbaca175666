//! Fibonacci CLI - compute the n-th Fibonacci number two ways
//!
//! This binary demonstrates two dynamic-programming strategies over the
//! same recurrence: memoized top-down recursion and bottom-up tabulation.
//! It prompts for an index on standard input and prints both results.

use clap::Parser;

#[derive(Parser)]
#[command(name = "fib", about = "Compute a Fibonacci number with two dynamic-programming strategies")]
#[command(version, long_about = None)]
struct Cli {}

fn main() {
    // Initialize logging
    fib::common::logging::init();

    // No options beyond --help/--version; parsing still rejects stray arguments.
    Cli::parse();

    if let Err(e) = fib::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
