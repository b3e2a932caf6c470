//! `SnapshotHandle<T>`: a shared reference to an immutable value that can be
//! replaced wholesale at runtime.
//!
//! Readers call [`SnapshotHandle::current`] to obtain an `Arc<T>` and then work
//! on that snapshot without holding any lock.  A writer builds a complete new
//! value off to the side and publishes it with [`SnapshotHandle::publish`];
//! the swap is a single pointer store under the mutex, so a reader sees either
//! the old value or the new one, never a mix.

use std::sync::{Arc, Mutex};

/// A shared, relinkable reference to an immutable snapshot of type `T`.
///
/// Clones share the same slot: publishing through one clone is visible to all
/// of them.
pub struct SnapshotHandle<T> {
    inner: Arc<Mutex<Arc<T>>>,
}

impl<T> Clone for SnapshotHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SnapshotHandle<T> {
    /// Create a new handle holding `value`.
    pub fn new(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Create a new handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(arc)),
        }
    }

    /// Replace the held snapshot with `value` and return the previous one.
    pub fn publish(&self, value: T) -> Arc<T> {
        self.publish_arc(Arc::new(value))
    }

    /// Replace the held snapshot with an existing `Arc` and return the
    /// previous one.
    pub fn publish_arc(&self, arc: Arc<T>) -> Arc<T> {
        let mut guard = self.inner.lock().expect("SnapshotHandle mutex poisoned");
        std::mem::replace(&mut *guard, arc)
    }

    /// Obtain the current snapshot.
    ///
    /// The lock is only held while the `Arc` is cloned.
    pub fn current(&self) -> Arc<T> {
        let guard = self.inner.lock().expect("SnapshotHandle mutex poisoned");
        Arc::clone(&guard)
    }

    /// Execute a closure against the current snapshot.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.current())
    }
}

impl<T: Default> Default for SnapshotHandle<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SnapshotHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SnapshotHandle({:?})", self.current())
    }
}
