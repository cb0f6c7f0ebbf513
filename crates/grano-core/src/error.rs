//! Error types shared across the core.

use thiserror::Error;

/// Errors surfaced by the core's operations.
///
/// Degenerate inputs (empty buffers, zero-length requests, out-of-range
/// cuts) are deliberately NOT errors: those degrade to documented fallback
/// values so generative pipelines keep running. Only genuinely bad
/// arguments and empty-collection choices are surfaced.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was outside its valid range.
    #[error("invalid argument: {context}")]
    InvalidArgument {
        /// What was invalid and why.
        context: String,
    },

    /// An operation that requires at least one element received none.
    #[error("empty input: {what}")]
    EmptyInput {
        /// The operation that had nothing to work with.
        what: &'static str,
    },

    /// Two buffers with different channel counts were combined.
    #[error("channel mismatch: expected {expected} channels, got {actual}")]
    ChannelMismatch {
        /// Channel count of the receiving buffer.
        expected: u16,
        /// Channel count of the offending buffer.
        actual: u16,
    },
}

impl Error {
    /// Create an [`Error::InvalidArgument`] from any displayable context.
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Error::InvalidArgument {
            context: context.into(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = core::result::Result<T, Error>;
