//! Operation types composed by the engine.
//!
//! Operations are shared closures so a decorator can call them repeatedly
//! (retry) or ship them to another thread (timeout).

use super::error::Error;
use std::sync::Arc;

/// Zero-argument operation producing a `T` or failing with an [`Error`].
///
/// # Example
///
/// ```rust
/// use composable_fp::core::operation;
///
/// let answer = operation(|| Ok(42));
/// assert_eq!(answer().unwrap(), 42);
/// ```
pub type Operation<T> = Arc<dyn Fn() -> Result<T, Error> + Send + Sync>;

/// Operation that receives the zero-based index of the current attempt.
pub type CountedOperation<T> = Arc<dyn Fn(usize) -> Result<T, Error> + Send + Sync>;

/// Maps one operation to another.
///
/// Construction may fail, but transforms are expected to defer failures to
/// the execution of the operation they return.
pub type OperationTransform<T> =
    Arc<dyn Fn(Operation<T>) -> Result<Operation<T>, Error> + Send + Sync>;

/// One-shot callback receiving the outcome of an asynchronous operation.
pub type AsyncCallback<T> = Box<dyn FnOnce(Result<T, Error>) + Send>;

/// Operation that arranges for its callback to be invoked once, later,
/// from an unspecified thread.
pub type AsyncOperation<T> = Arc<dyn Fn(AsyncCallback<T>) + Send + Sync>;

/// Wrap a closure as an [`Operation`].
pub fn operation<T, F>(f: F) -> Operation<T>
where
    F: Fn() -> Result<T, Error> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as a [`CountedOperation`].
pub fn counted_operation<T, F>(f: F) -> CountedOperation<T>
where
    F: Fn(usize) -> Result<T, Error> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure as an [`AsyncOperation`].
pub fn async_operation<T, F>(f: F) -> AsyncOperation<T>
where
    F: Fn(AsyncCallback<T>) + Send + Sync + 'static,
{
    Arc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn operation_is_reinvocable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let op = operation(move || Ok(counter.fetch_add(1, Ordering::SeqCst)));

        assert_eq!(op().unwrap(), 0);
        assert_eq!(op().unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn counted_operation_sees_attempt_index() {
        let op = counted_operation(|attempt| {
            if attempt == 2 {
                Ok("third")
            } else {
                Err(format!("attempt {attempt}").into())
            }
        });

        assert_eq!(op(0).unwrap_err().to_string(), "attempt 0");
        assert_eq!(op(2).unwrap(), "third");
    }

    #[test]
    fn async_operation_delivers_through_callback() {
        let op = async_operation(|callback: AsyncCallback<i32>| callback(Ok(7)));
        let (tx, rx) = std::sync::mpsc::channel();

        op(Box::new(move |result: Result<i32, Error>| {
            tx.send(result.map_err(|e| e.to_string())).unwrap();
        }));

        assert_eq!(rx.recv().unwrap(), Ok(7));
    }
}
