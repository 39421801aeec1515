//! Error conversion helpers for I/O while reading input
//!
//! Provides an extension trait for attaching context to `io::Result`.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add free-form context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// let line = line.with_context(format!("read line {line_no}"))?;
    /// ```
    fn with_context(self, context: impl Into<String>) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, context: impl Into<String>) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: context.into(),
            source: Box::new(e),
        })
    }
}
