//! Bridge from operations to Stillwater effects.
//!
//! Decorated operations are synchronous and blocking; lifting them into a
//! `BoxedEffect` lets them take part in Stillwater effect programs alongside
//! pure and environment-reading steps.
//!
//! Following Stillwater 0.11.0 conventions, effects are built with the
//! free-standing `from_fn()` constructor and boxed once at the boundary.

use crate::core::{Composable, Error, Operation};
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Lift an operation into an effect that ignores its environment.
///
/// The operation runs each time the effect is run.
pub fn into_effect<T, Env>(op: Operation<T>) -> BoxedEffect<T, Error, Env>
where
    T: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    from_fn(move |_env: &Env| op()).boxed()
}

/// Decorate `op` with `composable` and lift the result into an effect.
pub fn decorated<T, Env>(
    composable: &Composable<T>,
    op: Operation<T>,
) -> Result<BoxedEffect<T, Error, Env>, Error>
where
    T: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    Ok(into_effect(composable.invoke(op)?))
}
