//! Educational Fibonacci calculator.
//!
//! This library demonstrates the two classic dynamic-programming treatments
//! of the Fibonacci recurrence: memoized top-down recursion and bottom-up
//! tabulation. Both live in [`calculator`]; [`cli`] is the thin shell that
//! reads an index from standard input and prints what each strategy returns.

pub mod calculator;
pub mod cli;
pub mod common;

// Re-export commonly used items for tests
pub use calculator::{fib_bottom_up, fib_top_down, MAX_INDEX};
pub use common::{Error, Result};
