//! PIG domain compiler CLI.

use clap::Parser;
use pigc::{init_tracing, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
