//! CLI-level errors (wraps parser and domain errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::parser::ParseError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) | CliError::Domain(_) => crate::exitcode::DATAERR,
            CliError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                crate::exitcode::NOINPUT
            }
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
        }
    }
}
