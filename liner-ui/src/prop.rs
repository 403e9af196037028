//! Stable, comparable callback handles.
//!
//! Component argument structs want `PartialEq` so hosts can diff them, but a
//! boxed closure has no useful equality. [`CallbackWith`] wraps the handler in
//! an `Arc` and compares by handle identity: two clones of the same callback
//! are equal, two independently created callbacks are not.

use std::fmt;
use std::sync::Arc;

/// A shared, clonable handler for `Fn(T) -> R`.
///
/// Used for value-changed notification: the slider stores a
/// `CallbackWith<f64>` and invokes it whenever the committed value changes.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}
