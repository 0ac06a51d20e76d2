//! Core composition types.
//!
//! This module contains the building blocks every decorator works with:
//! - Operation types (`Operation`, `CountedOperation`, `AsyncOperation`)
//! - The `Composable` engine that layers transforms around operations
//! - The shared error model
//!
//! Nothing here has side effects at construction time; effects happen only
//! when a produced operation is executed.

mod composable;
mod error;
mod operation;

pub use composable::Composable;
pub use error::{ComposeError, Error};
pub use operation::{
    async_operation, counted_operation, operation, AsyncCallback, AsyncOperation,
    CountedOperation, Operation, OperationTransform,
};
