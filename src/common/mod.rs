//! Common infrastructure shared by the calculator and the CLI shell

pub mod error;
pub mod logging;

pub use error::{Error, Result};
