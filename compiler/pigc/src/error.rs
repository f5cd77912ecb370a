//! Driver errors.

use std::io;
use std::path::PathBuf;

use pig_diagnostic::CompileError;

/// Anything that stops the driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to read {}: {error}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write {}: {error}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("failed to write standard output: {0}")]
    Stdout(#[source] io::Error),

    #[error("malformed universe declaration: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize universe: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl DriverError {
    /// Process exit code: 1 for compile errors, 2 for I/O and JSON errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Compile(_) => 1,
            DriverError::Read { .. }
            | DriverError::Stdin(_)
            | DriverError::Write { .. }
            | DriverError::Stdout(_)
            | DriverError::Parse(_)
            | DriverError::Serialize(_) => 2,
        }
    }
}
