//! Thread-per-job executor.

use super::{Executor, Job};
use crate::core::ComposeError;
use std::thread;
use tracing::trace;

const DEFAULT_THREAD_NAME: &str = "composable-worker";

/// Spawns a new named OS thread for every job.
///
/// Jobs never share a thread with their caller, so blocking on a job from
/// any thread (including another job) cannot deadlock.
#[derive(Clone, Debug)]
pub struct ThreadExecutor {
    name: String,
}

impl ThreadExecutor {
    pub fn new() -> Self {
        Self::named(DEFAULT_THREAD_NAME)
    }

    /// Executor whose worker threads carry `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for ThreadExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ThreadExecutor {
    fn execute(&self, job: Job) -> Result<(), ComposeError> {
        trace!(thread = %self.name, "spawning worker thread");
        thread::Builder::new()
            .name(self.name.clone())
            .spawn(job)
            .map(|_| ())
            .map_err(|e| ComposeError::ExecutorUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn runs_job_on_named_thread() {
        let executor = ThreadExecutor::named("test-worker");
        let (tx, rx) = mpsc::channel();

        executor
            .execute(Box::new(move || {
                let name = thread::current().name().map(str::to_string);
                tx.send(name).unwrap();
            }))
            .unwrap();

        assert_eq!(rx.recv().unwrap().as_deref(), Some("test-worker"));
    }

    #[test]
    fn is_never_current() {
        let executor = ThreadExecutor::new();
        let (tx, rx) = mpsc::channel();
        let inner = executor.clone();

        executor
            .execute(Box::new(move || tx.send(inner.is_current()).unwrap()))
            .unwrap();

        assert!(!rx.recv().unwrap());
        assert!(!executor.is_current());
    }
}
