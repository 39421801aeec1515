//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::InputUnavailable { .. } => crate::exitcode::NOINPUT,
                ApplicationError::InvalidDirection { .. }
                | ApplicationError::InvalidNodeLine { .. }
                | ApplicationError::MissingDirections
                | ApplicationError::UnresolvedEdge { .. } => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                ApplicationError::Domain(DomainError::InvalidPattern { .. }) => {
                    crate::exitcode::USAGE
                }
                ApplicationError::Domain(DomainError::NodeNotFound(_))
                | ApplicationError::Domain(DomainError::NoStartNodes(_)) => crate::exitcode::DATAERR,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let missing = CliError::from(ApplicationError::InputUnavailable {
            path: PathBuf::from("input/input.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);

        let malformed = CliError::from(ApplicationError::InvalidNodeLine {
            line: 3,
            content: "AAA = (BBB,CCC)".into(),
        });
        assert_eq!(malformed.exit_code(), crate::exitcode::DATAERR);

        let limit = CliError::from(DomainError::JumpLimitExceeded { limit: 5 });
        assert_eq!(limit.exit_code(), crate::exitcode::SOFTWARE);

        assert_eq!(
            CliError::InvalidArgs("expected must be positive".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
