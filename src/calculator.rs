//! Fibonacci computation via two dynamic-programming strategies
//!
//! Both functions compute the same sequence (`fib(0) = 0`, `fib(1) = 1`,
//! `fib(n) = fib(n-1) + fib(n-2)`) and differ only in evaluation order:
//! [`fib_top_down`] recurses from `n` and caches subresults on demand,
//! [`fib_bottom_up`] fills a table from the base cases upward. Each call
//! owns its own table; nothing is shared between calls.

use crate::common::{Error, Result};

/// Largest index whose Fibonacci number fits in a `u64`.
///
/// `fib(94)` would exceed 64 bits, so indexes above this are rejected
/// instead of wrapping.
pub const MAX_INDEX: i64 = 93;

/// Validate a sequence index and convert it to a table size.
fn check_index(n: i64) -> Result<usize> {
    if n < 0 {
        return Err(Error::InvalidArgument(format!(
            "index must be non-negative (got {n})"
        )));
    }
    if n > MAX_INDEX {
        return Err(Error::InvalidArgument(format!(
            "index {n} is out of range: fibonacci({MAX_INDEX}) is the largest value that fits in 64 bits"
        )));
    }
    Ok(n as usize)
}

/// Compute the n-th Fibonacci number with memoized top-down recursion.
///
/// Allocates a fresh memo table sized `n + 1`, all entries unset, and
/// recurses from `n` down to the base cases. Each index is computed at most
/// once, so the work is O(n) additions with O(n) auxiliary storage. The
/// recursion depth also grows linearly with `n` and is bounded by the
/// available call stack; with indexes capped at [`MAX_INDEX`] that is at
/// most 93 frames.
///
/// Fails with [`Error::InvalidArgument`] when `n` is negative or larger
/// than [`MAX_INDEX`].
pub fn fib_top_down(n: i64) -> Result<u64> {
    let n = check_index(n)?;
    let mut memo: Vec<Option<u64>> = vec![None; n + 1];
    Ok(fill_memo(n, &mut memo))
}

/// Recursive worker for [`fib_top_down`].
///
/// Once `memo[i]` is set it holds `fib(i)` and is never overwritten.
fn fill_memo(n: usize, memo: &mut [Option<u64>]) -> u64 {
    if n < 2 {
        return n as u64;
    }
    if let Some(value) = memo[n] {
        return value;
    }
    let value = fill_memo(n - 1, memo) + fill_memo(n - 2, memo);
    memo[n] = Some(value);
    value
}

/// Compute the n-th Fibonacci number by bottom-up tabulation.
///
/// Builds a table of size `n + 1` strictly left-to-right: entries 0 and 1
/// are the base cases, every later entry is the sum of the two before it.
/// O(n) time and O(n) auxiliary space, discarded when the call returns.
///
/// Fails with [`Error::InvalidArgument`] when `n` is negative or larger
/// than [`MAX_INDEX`].
pub fn fib_bottom_up(n: i64) -> Result<u64> {
    let n = check_index(n)?;
    if n < 2 {
        return Ok(n as u64);
    }

    let mut table = vec![0u64; n + 1];
    table[1] = 1;
    for i in 2..=n {
        table[i] = table[i - 1] + table[i - 2];
    }
    Ok(table[n])
}
