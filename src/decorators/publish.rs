//! Side-effect hooks on the outcome of an operation.

use crate::core::{operation, Composable, Error};
use std::sync::Arc;
use tracing::warn;

/// Call `on_value` with every successfully produced value.
///
/// If `on_value` fails, its error replaces the value. On failure of the
/// operation itself `on_value` is never called.
pub fn publish<T, F>(on_value: F) -> Composable<T>
where
    T: 'static,
    F: Fn(&T) -> Result<(), Error> + Send + Sync + 'static,
{
    let on_value = Arc::new(on_value);
    Composable::new(move |op| {
        let on_value = Arc::clone(&on_value);
        Ok(operation(move || {
            let value = op()?;
            on_value(&value)?;
            Ok(value)
        }))
    })
}

/// Call `on_error` with every error, then propagate the original error.
///
/// The original error always wins: if `on_error` itself fails, that failure
/// is logged and dropped.
pub fn publish_error<T, F>(on_error: F) -> Composable<T>
where
    T: 'static,
    F: Fn(&Error) -> Result<(), Error> + Send + Sync + 'static,
{
    let on_error = Arc::new(on_error);
    Composable::new(move |op| {
        let on_error = Arc::clone(&on_error);
        Ok(operation(move || {
            op().map_err(|error| {
                if let Err(callback_error) = on_error(&error) {
                    warn!(%error, %callback_error, "error publisher failed");
                }
                error
            })
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn publish_sees_value_once() {
        let published = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&published);

        let result = publish(move |v: &i32| {
            sink.lock().unwrap().push(*v);
            Ok(())
        })
        .run(operation(|| Ok(1)));

        assert_eq!(result.unwrap(), 1);
        assert_eq!(*published.lock().unwrap(), vec![1]);
    }

    #[test]
    fn publish_skips_failures() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let result: Result<i32, Error> = publish(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .run(operation(|| Err("broken".into())));

        assert_eq!(result.unwrap_err().to_string(), "broken");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failing_publisher_replaces_value() {
        let result = publish(|_: &i32| Err("publisher down".into())).run(operation(|| Ok(1)));

        assert_eq!(result.unwrap_err().to_string(), "publisher down");
    }

    #[test]
    fn publish_error_rethrows_original() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let result: Result<i32, Error> = publish_error(move |e: &Error| {
            sink.lock().unwrap().push(e.to_string());
            Ok(())
        })
        .run(operation(|| Err("broken".into())));

        assert_eq!(result.unwrap_err().to_string(), "broken");
        assert_eq!(*seen.lock().unwrap(), vec!["broken".to_string()]);
    }

    #[test]
    fn publish_error_original_wins_over_callback_failure() {
        let result: Result<i32, Error> = publish_error(|_: &Error| Err("callback broke".into()))
            .run(operation(|| Err("original".into())));

        assert_eq!(result.unwrap_err().to_string(), "original");
    }

    #[test]
    fn publish_error_skips_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let result = publish_error(move |_: &Error| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .run(operation(|| Ok(3)));

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
