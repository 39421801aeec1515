//! Application services
//!
//! Use cases that combine loading, settings and traversal.

pub mod navigation;

pub use navigation::{GhostReport, NavigationService};
