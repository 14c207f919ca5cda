//! Streaming error types.

use thiserror::Error;

/// Errors raised by [`StreamingSink`](crate::StreamingSink).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A section or replacement was sent before the shell.
    #[error("Shell must be sent before sections")]
    ShellNotSent,

    #[error("Shell already sent")]
    ShellAlreadySent,

    #[error("Sink already completed")]
    Completed,

    /// A deferred replacement named an element id that is not a plain token.
    #[error("Invalid deferred target: {0:?}")]
    InvalidTarget(String),

    /// The underlying body rejected the write.
    #[error("Stream write failed: {0}")]
    Write(String),
}
