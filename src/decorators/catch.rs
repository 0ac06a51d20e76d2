//! Error substitution.

use crate::core::{operation, Composable, Error};
use std::sync::Arc;

/// Replace a failure with the value produced by `handler`.
///
/// A failing handler propagates its own error. Successful values pass through
/// and the handler is never called.
pub fn catch<T, F>(handler: F) -> Composable<T>
where
    T: 'static,
    F: Fn(Error) -> Result<T, Error> + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    Composable::new(move |op| {
        let handler = Arc::clone(&handler);
        Ok(operation(move || op().or_else(|error| handler(error))))
    })
}

/// Replace any failure with a clone of `value`.
pub fn catch_return<T>(value: T) -> Composable<T>
where
    T: Clone + Send + Sync + 'static,
{
    catch(move |_| Ok(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn catch_substitutes_value_on_failure() {
        let result = catch(|_| Ok(1)).run(operation(|| Err("broken".into())));

        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn catch_passes_success_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let result = catch(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(100)
        })
        .run(operation(|| Ok(1)));

        assert_eq!(result.unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failing_handler_propagates() {
        let result: Result<i32, Error> =
            catch(|error| Err(format!("handler saw: {error}").into()))
                .run(operation(|| Err("original".into())));

        assert_eq!(result.unwrap_err().to_string(), "handler saw: original");
    }

    #[test]
    fn rethrowing_handler_keeps_original_error() {
        let result: Result<i32, Error> =
            catch(Err).run(operation(|| Err("original".into())));

        assert_eq!(result.unwrap_err().to_string(), "original");
    }

    #[test]
    fn catch_return_supplies_fixed_value() {
        let fallback = catch_return("fallback".to_string());

        assert_eq!(
            fallback.run(operation(|| Err("broken".into()))).unwrap(),
            "fallback"
        );
        assert_eq!(
            fallback.run(operation(|| Ok("fresh".to_string()))).unwrap(),
            "fresh"
        );
    }
}
