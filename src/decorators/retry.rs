//! Retry decorators.
//!
//! All retry variants share one loop: attempt `0` runs first, and each
//! failure is retried with the next index until `times` retries have been
//! spent, at which point the error of that final attempt propagates. A retry
//! count of `times` therefore makes at most `times + 1` attempts, strictly one
//! after another on the calling thread.

use crate::core::{counted_operation, operation, Composable, CountedOperation, Operation};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Build an operation that retries a count-aware operation up to `times`
/// times.
///
/// The returned closure adapts a [`CountedOperation`], which receives the
/// zero-based index of the current attempt. The index can be used to derive
/// custom per-attempt behaviour such as backoff.
///
/// # Example
///
/// ```rust
/// use composable_fp::core::counted_operation;
/// use composable_fp::decorators::retry_with_count;
///
/// let flaky = counted_operation(|attempt| {
///     if attempt < 2 {
///         Err("not yet".into())
///     } else {
///         Ok(attempt)
///     }
/// });
///
/// let op = retry_with_count(3)(flaky);
/// assert_eq!(op().unwrap(), 2);
/// ```
pub fn retry_with_count<T: 'static>(
    times: usize,
) -> impl Fn(CountedOperation<T>) -> Operation<T> + Send + Sync + Clone + 'static {
    move |counted: CountedOperation<T>| {
        operation(move || {
            let mut attempt = 0;
            loop {
                match counted(attempt) {
                    Ok(value) => return Ok(value),
                    Err(error) if attempt < times => {
                        debug!(attempt, max_retries = times, %error, "attempt failed, retrying");
                        attempt += 1;
                    }
                    Err(error) => {
                        debug!(attempts = attempt + 1, %error, "retries exhausted");
                        return Err(error);
                    }
                }
            }
        })
    }
}

/// Retry a failing operation up to `times` times.
///
/// `times == 0` makes exactly one attempt.
pub fn retry<T: 'static>(times: usize) -> Composable<T> {
    let retrying = retry_with_count(times);
    Composable::new(move |op: Operation<T>| Ok(retrying(ignore_attempt(op))))
}

/// Retry like [`retry`], sleeping `delay` on the calling thread before every
/// attempt after the first.
pub fn retry_with_delay<T: 'static>(times: usize, delay: Duration) -> Composable<T> {
    let retrying = retry_with_count(times);
    Composable::new(move |op: Operation<T>| {
        let delayed = counted_operation(move |attempt| {
            if attempt > 0 {
                thread::sleep(delay);
            }
            op()
        });
        Ok(retrying(delayed))
    })
}

fn ignore_attempt<T: 'static>(op: Operation<T>) -> CountedOperation<T> {
    counted_operation(move |_| op())
}
