//! Composable FP: decorators for fallible operations
//!
//! The crate layers behaviour around zero-argument fallible operations.
//! Each decorator is a `Composable`, a wrapper around one operation
//! transform, and decorators chain with `compose` so the receiver becomes
//! the outer layer.
//!
//! # Core Concepts
//!
//! - **Operation**: shared closure producing a value or an [`Error`]
//! - **Composable**: ordered composition of operation transforms
//! - **Decorators**: catch, retry, publish, timeout, sync and noop
//! - **Executors**: execution contexts that `timeout` schedules work on
//!
//! # Example
//!
//! ```rust
//! use composable_fp::core::{operation, Error};
//! use composable_fp::decorators::{catch_return, retry, timeout};
//! use composable_fp::executor::ThreadExecutor;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let attempts = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&attempts);
//! let flaky = operation(move || {
//!     if counter.fetch_add(1, Ordering::SeqCst) < 2 {
//!         Err::<u32, Error>("unavailable".into())
//!     } else {
//!         Ok(200)
//!     }
//! });
//!
//! let pipeline = catch_return(503)
//!     .compose(&retry(5))
//!     .compose(&timeout(Duration::from_secs(1), Arc::new(ThreadExecutor::new())));
//!
//! assert_eq!(pipeline.run(flaky).unwrap(), 200);
//! assert_eq!(attempts.load(Ordering::SeqCst), 3);
//! ```

pub mod builder;
pub mod core;
pub mod decorators;
pub mod effects;
pub mod executor;

// Re-export commonly used types
pub use crate::builder::{BuildError, PipelineBuilder, PipelineConfig};
pub use crate::core::{ComposeError, Composable, Error, Operation};
pub use crate::executor::{Executor, SerialExecutor, ThreadExecutor};
