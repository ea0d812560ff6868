// gldrawable/src/toolkit.rs
//
//! The process-wide toolkit lock.
//!
//! Serializes buffer swaps (and pbuffer creation and teardown) with every other interaction with
//! the windowing system that goes through this crate.

use std::sync::{Mutex, MutexGuard, PoisonError};

static TOOLKIT_MUTEX: Mutex<()> = Mutex::new(());

/// Holds the toolkit lock until dropped.
#[must_use]
pub struct ToolkitGuard {
    _guard: MutexGuard<'static, ()>,
}

/// Acquires the toolkit lock, blocking until it is available.
///
/// Poisoning is ignored.
pub fn lock_toolkit() -> ToolkitGuard {
    let guard = TOOLKIT_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
    trace!("toolkit locked");
    ToolkitGuard { _guard: guard }
}

impl Drop for ToolkitGuard {
    fn drop(&mut self) {
        trace!("toolkit unlocked");
    }
}

#[cfg(test)]
pub(crate) fn toolkit_is_locked() -> bool {
    use std::sync::TryLockError;
    matches!(TOOLKIT_MUTEX.try_lock(), Err(TryLockError::WouldBlock))
}
