//! Blocking bridge from callback-style asynchronous operations.

use crate::core::{operation, AsyncOperation, ComposeError, Error, Operation};
use std::sync::mpsc;
use tracing::trace;

/// Turn an [`AsyncOperation`] into a blocking [`Operation`].
///
/// Each execution registers a fresh one-shot callback, blocks until it is
/// delivered, then returns the delivered value or error. The result is an
/// ordinary operation, so it can be fed to `retry`, `timeout`, `catch` and
/// the other decorators.
///
/// If the asynchronous operation drops its callback without calling it, the
/// execution fails with [`ComposeError::CallbackDropped`]. A callback that
/// fires synchronously, before the asynchronous operation returns, is also
/// handled; any other callback must fire from a thread other than the one
/// blocked here.
///
/// # Example
///
/// ```rust
/// use composable_fp::core::{async_operation, AsyncCallback};
/// use composable_fp::decorators::sync;
/// use std::thread;
///
/// let remote = async_operation(|callback: AsyncCallback<u32>| {
///     thread::spawn(move || callback(Ok(3)));
/// });
///
/// let blocking = sync(remote);
/// assert_eq!(blocking().unwrap(), 3);
/// ```
pub fn sync<T>(async_op: AsyncOperation<T>) -> Operation<T>
where
    T: Send + 'static,
{
    operation(move || {
        let (sender, receiver) = mpsc::sync_channel(1);
        async_op(Box::new(move |outcome: Result<T, Error>| {
            trace!("async callback delivered");
            // receiver is only gone if the waiting thread unwound
            let _ = sender.send(outcome);
        }));

        match receiver.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(ComposeError::CallbackDropped.into()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{async_operation, AsyncCallback, Error};
    use crate::decorators::{publish_error, retry};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    fn delayed(delay: Duration, outcome: fn() -> Result<i32, Error>) -> AsyncOperation<i32> {
        async_operation(move |callback: AsyncCallback<i32>| {
            thread::spawn(move || {
                thread::sleep(delay);
                callback(outcome());
            });
        })
    }

    #[test]
    fn returns_value_after_delay() {
        let delay = Duration::from_millis(100);
        let op = sync(delayed(delay, || Ok(3)));

        let start = Instant::now();
        let value = op().unwrap();

        assert_eq!(value, 3);
        assert!(start.elapsed() >= delay);
    }

    #[test]
    fn propagates_delivered_error() {
        let op = sync(delayed(Duration::ZERO, || Err("remote failure".into())));

        assert_eq!(op().unwrap_err().to_string(), "remote failure");
    }

    #[test]
    fn handles_synchronous_callback() {
        let op = sync(async_operation(|callback: AsyncCallback<i32>| callback(Ok(5))));

        assert_eq!(op().unwrap(), 5);
    }

    #[test]
    fn dropped_callback_fails_instead_of_hanging() {
        let op = sync(async_operation(|callback: AsyncCallback<i32>| drop(callback)));

        let error = op().unwrap_err();
        assert_eq!(
            error.downcast_ref::<ComposeError>(),
            Some(&ComposeError::CallbackDropped)
        );
    }

    #[test]
    fn participates_in_retry_pipeline() {
        let published = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&published);
        let retries = 100;

        let result = retry(retries)
            .compose(&publish_error(move |_: &Error| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }))
            .run(sync(delayed(Duration::ZERO, || Err("Error".into()))));

        assert_eq!(result.unwrap_err().to_string(), "Error");
        assert_eq!(published.load(Ordering::SeqCst), retries + 1);
    }
}
