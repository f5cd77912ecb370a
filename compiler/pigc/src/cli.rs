//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use pig_diff::CompileOptions;

/// Synthesize type domains and their transforms from a universe declaration
#[derive(Parser, Debug)]
#[command(name = "pigc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Universe declaration as JSON (default: stdin)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Write the synthesized universe here (default: stdout)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub out: Option<PathBuf>,

    /// Diff transform requests on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for parallel diffing
    #[arg(long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Log compiler passes to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            parallel: !self.sequential,
            threads: self.threads,
        }
    }
}

#[cfg(test)]
mod tests;
