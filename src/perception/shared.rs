//! Shared collaborator instances.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serialized access to a perception collaborator shared across callers.
///
/// Collaborators may hold internal mutable device or runtime state and are
/// NOT assumed safe for concurrent calls. When one instance serves several
/// top-level requests (a server handling parallel uploads, a batch run on
/// a thread pool), wrap it here and take [`lock`](Self::lock) around each
/// call. The reconstruction core itself has no shared mutable state and
/// needs no such wrapper.
pub struct Collaborator<T> {
    inner: Mutex<T>,
}

impl<T> Collaborator<T> {
    /// Wrap a collaborator instance.
    pub fn new(inner: T) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Acquire exclusive access for one call.
    ///
    /// A poisoned lock is recovered rather than propagated: the
    /// collaborator value itself carries no invariant this crate relies on.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Unwrap the inner collaborator.
    pub fn into_inner(self) -> T {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
