//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add loading and config context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot open input {path:?}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid direction '{found}'")]
    InvalidDirection { line: usize, found: char },

    #[error("line {line}: invalid node definition: {content}")]
    InvalidNodeLine { line: usize, content: String },

    #[error("input has no direction line")]
    MissingDirections,

    #[error("edge {from} = ({left}, {right}) cannot be linked: {source}")]
    UnresolvedEdge {
        from: String,
        left: String,
        right: String,
        #[source]
        source: DomainError,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
