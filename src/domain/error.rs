//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of parsing and CLI concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("wrong mass value: {token}")]
    InvalidMass { token: String },

    #[error("empty scale name")]
    EmptyName,

    #[error("duplicate scale name: {0}")]
    DuplicateScaleName(String),

    #[error("scale is used more than once: {0}")]
    DuplicateReference(String),

    #[error("cannot find tree root")]
    NoRoot,

    #[error("found tree roots: {0}")]
    MultipleRoots(usize),

    #[error("circular reference: {0}")]
    CircularReference(String),

    #[error("scale not found: {0}")]
    ScaleNotFound(String),
}

/// Result type for scale-tree operations.
pub type DomainResult<T> = Result<T, DomainError>;
