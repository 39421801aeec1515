//! Domain-level errors (graph and traversal)

use thiserror::Error;

use crate::domain::entities::NodeId;

/// Domain errors represent violations of the graph's contract.
/// These are independent of where the network was loaded from.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("node has no edges: {0}")]
    UnlinkedNode(String),

    #[error("node handle does not belong to this graph: {0:?}")]
    ForeignHandle(NodeId),

    #[error("direction tape is empty")]
    EmptyDirections,

    #[error("no start node matches pattern: {0}")]
    NoStartNodes(String),

    #[error("jump limit of {limit} reached before the target was hit")]
    JumpLimitExceeded { limit: u64 },

    #[error("least common multiple of {a} and {b} overflows u64")]
    Overflow { a: u64, b: u64 },

    #[error("invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for graph and traversal operations.
pub type DomainResult<T> = Result<T, DomainError>;
