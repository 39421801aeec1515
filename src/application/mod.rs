//! Application layer: loading and use cases
//!
//! This layer turns input files into graphs and drives the domain traversal.

pub mod error;
pub mod error_ext;
pub mod loader;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use loader::GraphLoader;
