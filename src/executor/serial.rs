//! Single-worker FIFO executor.

use super::{Executor, Job};
use crate::core::ComposeError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, ThreadId};
use tracing::{debug, trace, warn};

/// Runs jobs one at a time, in submission order, on one dedicated thread.
///
/// Blocking on a job from inside another job of the same executor would
/// deadlock; [`is_current`](Executor::is_current) reports `true` on the
/// worker so `timeout` can refuse such calls.
///
/// A panicking job is logged and the worker moves on to the next one.
///
/// Dropping the executor closes the queue; the worker drains the jobs already
/// submitted and then exits.
#[derive(Debug)]
pub struct SerialExecutor {
    name: String,
    sender: Sender<Job>,
    worker: ThreadId,
}

impl SerialExecutor {
    /// Start the worker thread.
    pub fn new(name: impl Into<String>) -> Result<Self, ComposeError> {
        let name = name.into();
        let (sender, receiver) = mpsc::channel::<Job>();
        let worker_name = name.clone();

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                for job in receiver {
                    if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
                        warn!(executor = %worker_name, "job panicked");
                    }
                }
                debug!(executor = %worker_name, "serial executor drained");
            })
            .map_err(|e| ComposeError::ExecutorUnavailable(e.to_string()))?;

        Ok(Self {
            worker: handle.thread().id(),
            name,
            sender,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Executor for SerialExecutor {
    fn execute(&self, job: Job) -> Result<(), ComposeError> {
        trace!(executor = %self.name, "enqueueing job");
        self.sender
            .send(job)
            .map_err(|_| ComposeError::ExecutorUnavailable(format!("{} has stopped", self.name)))
    }

    fn is_current(&self) -> bool {
        thread::current().id() == self.worker
    }
}
