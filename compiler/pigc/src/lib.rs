//! PIG domain compiler driver.
//!
//! Reads a parsed universe declaration as JSON, runs synthesis and diffing,
//! and writes the synthesized universe back out as JSON. The driver owns
//! configuration, logging and exit codes; all structural facts come from the
//! core crates.

mod cli;
mod driver;
mod error;

pub use cli::Cli;
pub use driver::{compile_json, init_tracing, run};
pub use error::DriverError;
