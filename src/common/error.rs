//! Error types for the Fibonacci CLI
//!
//! The calculator itself can only fail one way: being handed an index
//! outside its domain. The remaining variants belong to the shell layer,
//! which owns everything to do with reading the index from the user.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Fibonacci CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Calculator Errors ===
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // === Input Errors (shell layer) ===
    #[error("invalid input {0:?}: expected an integer index")]
    InvalidInput(String),

    #[error("standard input ended before an index was entered")]
    InputExhausted,

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
