//! Interactive shell around the calculator
//!
//! Reads one sequence index from standard input and prints the result of
//! both strategies, one labeled line each. Validation of the index itself
//! lives in [`crate::calculator`]; this layer only parses the line and
//! decides how errors surface (it terminates rather than re-prompting).

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::calculator;
use crate::common::{Error, Result};

/// Run one prompt/compute/print interaction.
pub fn run() -> Result<()> {
    let n = read_index()?;
    debug!(n, "computing fibonacci number both ways");

    let top_down = calculator::fib_top_down(n)?;
    let bottom_up = calculator::fib_bottom_up(n)?;

    println!("Top-down (memoized): {top_down}");
    println!("Bottom-up (tabulated): {bottom_up}");

    Ok(())
}

/// Prompt for and read a sequence index from standard input.
///
/// Surrounding whitespace is tolerated; anything that does not parse as a
/// signed 64-bit integer is rejected here, so the calculator only ever sees
/// a well-formed index.
fn read_index() -> Result<i64> {
    print!("Enter the Fibonacci index to compute: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(Error::InputExhausted);
    }

    let raw = line.trim();
    raw.parse()
        .map_err(|_| Error::InvalidInput(raw.to_string()))
}
