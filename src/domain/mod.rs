//! Domain layer: entities and traversal logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod graph;
pub mod math;
pub mod pattern;
pub mod traversal;

pub use entities::{Direction, Node, NodeId};
pub use error::{DomainError, DomainResult};
pub use graph::Graph;
pub use math::{gcd, lcm, lcm_all};
pub use pattern::{Matcher, NamePattern};
pub use traversal::{NoProgress, ProgressReporter, Traversal, Walker};
