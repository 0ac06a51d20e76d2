//! Decorator library.
//!
//! Every decorator is a factory returning a [`Composable`](crate::core::Composable)
//! (or, for [`sync`], a ready-made operation). Decorators compose with
//! [`Composable::compose`](crate::core::Composable::compose); the receiver
//! becomes the outer layer:
//!
//! ```rust
//! use composable_fp::core::{operation, Error};
//! use composable_fp::decorators::{publish_error, retry};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let failures = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&failures);
//!
//! // publish_error is outermost, so it only sees the final failure.
//! let pipeline = publish_error(move |_: &Error| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! })
//! .compose(&retry(10));
//!
//! let result: Result<i32, Error> = pipeline.run(operation(|| Err("down".into())));
//! assert!(result.is_err());
//! assert_eq!(failures.load(Ordering::SeqCst), 1);
//! ```

mod catch;
mod noop;
mod publish;
mod retry;
mod sync;
mod timeout;

pub use catch::{catch, catch_return};
pub use noop::noop;
pub use publish::{publish, publish_error};
pub use retry::{retry, retry_with_count, retry_with_delay};
pub use sync::sync;
pub use timeout::timeout;
