//! Driver pipeline: read, compile, write.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Once;

use pig_diff::{compile_universe, CompileOptions};
use pig_ir::UniverseDecl;

use crate::{Cli, DriverError};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Output is hierarchical and goes to stderr. Nothing is installed unless
/// `RUST_LOG` is set or `verbose` is true; `verbose` without `RUST_LOG`
/// enables debug output of the compiler crates.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = match std::env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) if verbose => EnvFilter::new("pig_synth=debug,pig_diff=debug,pigc=debug"),
            Err(_) => return,
        };
        tracing_subscriber::registry()
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    });
}

/// Run the driver for parsed command-line arguments.
pub fn run(cli: &Cli) -> Result<(), DriverError> {
    let input = read_input(cli.input.as_deref())?;
    let output = compile_json(&input, &cli.compile_options(), cli.pretty)?;
    write_output(cli.out.as_deref(), &output)
}

/// Compile a JSON universe declaration into the JSON synthesized universe.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = input.len()))]
pub fn compile_json(
    input: &str,
    options: &CompileOptions,
    pretty: bool,
) -> Result<String, DriverError> {
    let decl: UniverseDecl = serde_json::from_str(input).map_err(DriverError::Parse)?;
    tracing::debug!(
        domains = decl.domains.len(),
        transforms = decl.transforms.len(),
        "parsed universe declaration"
    );

    let universe = compile_universe(&decl, options)?;

    let mut json = if pretty {
        serde_json::to_string_pretty(&universe)
    } else {
        serde_json::to_string(&universe)
    }
    .map_err(DriverError::Serialize)?;
    json.push('\n');
    Ok(json)
}

fn read_input(path: Option<&Path>) -> Result<String, DriverError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading universe");
            std::fs::read_to_string(path).map_err(|error| DriverError::Read {
                path: path.to_owned(),
                error,
            })
        }
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(DriverError::Stdin)?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), DriverError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "writing universe");
            std::fs::write(path, output).map_err(|error| DriverError::Write {
                path: path.to_owned(),
                error,
            })
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(DriverError::Stdout)
        }
    }
}

#[cfg(test)]
mod tests;
