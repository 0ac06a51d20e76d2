//! Deadline race between an operation and a timer.

use crate::core::{operation, ComposeError, Composable, Error, Operation};
use crate::executor::Executor;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;
use tracing::{trace, warn};

/// Fail with [`ComposeError::TimedOut`] when the operation does not finish
/// within `duration`.
///
/// Each execution schedules the wrapped operation on `executor` and blocks
/// the calling thread until the operation completes or the deadline passes,
/// whichever happens first. A completed result, value or error, always wins
/// over the deadline.
///
/// The wrapped operation is not cancelled on timeout: it keeps running on
/// the executor and its eventual result is discarded.
///
/// A panic inside the operation is reported as an immediate error rather
/// than a timeout.
///
/// The calling thread must not be a worker of `executor`; such calls fail
/// with [`ComposeError::SameExecutionContext`] instead of deadlocking.
///
/// # Example
///
/// ```rust
/// use composable_fp::core::{operation, ComposeError};
/// use composable_fp::decorators::timeout;
/// use composable_fp::executor::ThreadExecutor;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let bounded = timeout(Duration::from_millis(50), Arc::new(ThreadExecutor::new()));
/// let slow = operation(|| {
///     std::thread::sleep(Duration::from_millis(500));
///     Ok(1)
/// });
///
/// let error = bounded.run(slow).unwrap_err();
/// assert!(ComposeError::is_timeout(&error));
/// ```
pub fn timeout<T>(duration: Duration, executor: Arc<dyn Executor>) -> Composable<T>
where
    T: Send + 'static,
{
    Composable::new(move |op: Operation<T>| {
        let executor = Arc::clone(&executor);
        Ok(operation(move || race(&op, duration, executor.as_ref())))
    })
}

struct Slot<T> {
    outcome: Mutex<Option<Result<T, Error>>>,
    ready: Condvar,
}

fn race<T>(op: &Operation<T>, duration: Duration, executor: &dyn Executor) -> Result<T, Error>
where
    T: Send + 'static,
{
    if executor.is_current() {
        return Err(ComposeError::SameExecutionContext.into());
    }

    let slot = Arc::new(Slot {
        outcome: Mutex::new(None),
        ready: Condvar::new(),
    });

    let worker_slot = Arc::clone(&slot);
    let worker_op = Arc::clone(op);
    executor.execute(Box::new(move || {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| worker_op()))
            .unwrap_or_else(|_| Err(ComposeError::msg("operation panicked").into()));
        let mut guard = worker_slot
            .outcome
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(outcome);
        drop(guard);
        worker_slot.ready.notify_all();
    }))?;
    trace!(?duration, "operation scheduled, waiting for deadline");

    let guard = slot.outcome.lock().unwrap_or_else(PoisonError::into_inner);
    let (mut guard, _) = slot
        .ready
        .wait_timeout_while(guard, duration, |outcome| outcome.is_none())
        .unwrap_or_else(PoisonError::into_inner);

    match guard.take() {
        Some(outcome) => outcome,
        None => {
            warn!(?duration, "operation timed out");
            Err(ComposeError::TimedOut { duration }.into())
        }
    }
}
