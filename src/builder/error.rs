//! Build errors for pipeline configuration.

use thiserror::Error;

/// Errors that can occur when building a decorated pipeline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Timeout configured without an executor. Call .executor(executor) before .build()")]
    MissingExecutor,

    #[error("Retry delay configured with zero retries. Call .retries(n) with n > 0")]
    RetryDelayWithoutRetries,

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Invalid pipeline configuration: {0}")]
    InvalidConfig(String),
}
