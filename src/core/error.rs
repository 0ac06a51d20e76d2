//! Error types shared by every operation and decorator.

use std::time::Duration;
use thiserror::Error;

/// Dynamically typed error carried by operations.
///
/// Operations may fail with any error type; decorators propagate it untouched
/// so callers can recover the concrete type with `downcast_ref`.
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the composition engine itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComposeError {
    #[error("Timed out after {duration:?}")]
    TimedOut { duration: Duration },

    #[error("Operation was invoked from the execution context it is scheduled on")]
    SameExecutionContext,

    #[error("Execution context unavailable: {0}")]
    ExecutorUnavailable(String),

    #[error("Async operation dropped its callback without delivering a result")]
    CallbackDropped,

    #[error("{0}")]
    Message(String),
}

impl ComposeError {
    /// Generic library error with a human-readable message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Check whether a propagated error is a timeout raised by `timeout`.
    pub fn is_timeout(error: &Error) -> bool {
        matches!(
            error.downcast_ref::<ComposeError>(),
            Some(ComposeError::TimedOut { .. })
        )
    }
}
