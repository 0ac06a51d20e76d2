//! The composition engine.

use super::error::Error;
use super::operation::{AsyncCallback, Operation, OperationTransform};
use crate::executor::Executor;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Wraps exactly one [`OperationTransform`] and composes it with others.
///
/// A `Composable` is immutable: [`compose`](Self::compose) always returns a
/// new instance and leaves both inputs untouched. All side effects are
/// deferred until the operation returned by [`invoke`](Self::invoke) runs.
///
/// # Example
///
/// ```rust
/// use composable_fp::core::{operation, Composable};
///
/// let double: Composable<i32> = Composable::new(|op| {
///     Ok(operation(move || op().map(|v| v * 2)))
/// });
/// let add_one: Composable<i32> = Composable::new(|op| {
///     Ok(operation(move || op().map(|v| v + 1)))
/// });
///
/// // `double` wraps `add_one`, so the base value is incremented first.
/// let pipeline = double.compose(&add_one);
/// assert_eq!(pipeline.run(operation(|| Ok(3))).unwrap(), 8);
/// ```
pub struct Composable<T> {
    transform: OperationTransform<T>,
}

impl<T: 'static> Composable<T> {
    /// Create a composable from a transform closure.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Operation<T>) -> Result<Operation<T>, Error> + Send + Sync + 'static,
    {
        Self {
            transform: Arc::new(transform),
        }
    }

    /// Create a composable from an already shared transform.
    pub fn from_transform(transform: OperationTransform<T>) -> Self {
        Self { transform }
    }

    /// The wrapped transform.
    pub fn transform(&self) -> OperationTransform<T> {
        Arc::clone(&self.transform)
    }

    /// Apply the wrapped transform to `operation`.
    pub fn invoke(&self, operation: Operation<T>) -> Result<Operation<T>, Error> {
        (self.transform)(operation)
    }

    /// Compose with another composable; `self` wraps around `inner`.
    ///
    /// Invoking the result with `f` applies `inner` to `f` first, then
    /// `self` to the intermediate operation.
    pub fn compose(&self, inner: &Composable<T>) -> Composable<T> {
        self.compose_transform(inner.transform())
    }

    /// Compose with a bare transform closure; `self` wraps around it.
    pub fn compose_fn<F>(&self, inner: F) -> Composable<T>
    where
        F: Fn(Operation<T>) -> Result<Operation<T>, Error> + Send + Sync + 'static,
    {
        self.compose_transform(Arc::new(inner))
    }

    fn compose_transform(&self, inner: OperationTransform<T>) -> Composable<T> {
        let outer = self.transform();
        Composable::new(move |operation| {
            let intermediate = inner(operation)?;
            outer(intermediate)
        })
    }

    /// Invoke with `operation` and execute the result on the calling thread.
    pub fn run(&self, operation: Operation<T>) -> Result<T, Error> {
        let decorated = self.invoke(operation)?;
        decorated()
    }
}

impl<T: Send + 'static> Composable<T> {
    /// Invoke with `operation` and execute the result on `executor`,
    /// delivering the outcome to `callback`.
    ///
    /// Failures to build or schedule the operation are returned directly and
    /// `callback` is dropped without being called.
    pub fn invoke_async(
        &self,
        operation: Operation<T>,
        executor: &dyn Executor,
        callback: AsyncCallback<T>,
    ) -> Result<(), Error> {
        let decorated = self.invoke(operation)?;
        trace!("scheduling decorated operation");
        executor.execute(Box::new(move || callback(decorated())))?;
        Ok(())
    }
}

impl<T> Clone for Composable<T> {
    fn clone(&self) -> Self {
        Self {
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<T> fmt::Debug for Composable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composable").finish_non_exhaustive()
    }
}
