//! Identity decorator.

use crate::core::Composable;

/// Return every operation unchanged.
///
/// Useful as a placeholder when decorators are included conditionally.
pub fn noop<T: 'static>() -> Composable<T> {
    Composable::new(Ok)
}
