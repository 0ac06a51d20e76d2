//! Execution contexts that decorators schedule work on.
//!
//! The library never owns a pool of its own: callers pass an [`Executor`]
//! to `timeout` (and supply one implicitly for any async operation fed into
//! `sync`). Two implementations are provided:
//!
//! - [`ThreadExecutor`]: runs every job on a freshly spawned thread
//! - [`SerialExecutor`]: runs jobs one at a time, in order, on a single worker
//!
//! # Blocking and deadlocks
//!
//! `timeout` blocks the calling thread until the job finishes or the deadline
//! passes. If the calling thread is the only worker able to run the job, the
//! job can never start. Executors report this through
//! [`Executor::is_current`] so the decorator can refuse instead of hanging.

mod serial;
mod thread;

pub use serial::SerialExecutor;
pub use thread::ThreadExecutor;

use crate::core::ComposeError;

/// Unit of work scheduled on an executor.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// An execution context able to run jobs asynchronously.
pub trait Executor: Send + Sync {
    /// Schedule `job` to run later on this context.
    fn execute(&self, job: Job) -> Result<(), ComposeError>;

    /// Whether the calling thread is one of this context's workers.
    fn is_current(&self) -> bool {
        false
    }
}
