//! # Eä Lock
//!
//! Pluggable lock capability for otherwise single-threaded value types.
//!
//! ## Overview
//!
//! Nothing in the Eä outcome/stack core synchronises on its own. Callers that
//! share state between threads wrap their critical sections in a
//! [`LockGuard`] over a [`Lock`] of their choice. Types that embed a lock
//! take it as a type parameter defaulting to [`NullLock`], which compiles to
//! nothing.
//!
//! `NullLock` is not `Sync`. Sharing it between threads is a compile error
//! rather than a silent data race:
//!
//! ```compile_fail
//! use ea_lock::{Lock, LockGuard, NullLock};
//!
//! let lock = NullLock::INIT;
//! std::thread::scope(|s| {
//!     s.spawn(|| {
//!         let _guard = LockGuard::new(&lock);
//!     });
//! });
//! ```
//!
//! With the `std` feature, `parking_lot::RawMutex` is a ready-made `Lock`.

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(clippy::all, clippy::pedantic)]

use core::cell::Cell;
use core::marker::PhantomData;

mod cached;
#[cfg(feature = "std")]
mod raw;

pub use cached::CachedCallable;
#[cfg(feature = "std")]
pub use parking_lot::RawMutex;

/// Lock-like capability: `lock` / `try_lock` / `unlock`.
///
/// # Safety
///
/// If the implementor is `Sync`, it must provide mutual exclusion: after
/// `lock` returns, or `try_lock` returns `true`, no other thread may acquire
/// the lock until `unlock` is called. Implementors that are not `Sync` can
/// only be used from one thread and carry no obligation.
#[allow(unsafe_code)]
pub unsafe trait Lock {
    /// Unlocked initial state.
    const INIT: Self;

    /// Acquire, blocking as long as needed.
    fn lock(&self);

    /// Acquire without blocking. `true` on success.
    fn try_lock(&self) -> bool;

    /// Release.
    ///
    /// # Safety
    ///
    /// The lock must be held in the current context.
    unsafe fn unlock(&self);
}

/// No-op lock, the zero-cost default.
///
/// Every operation succeeds immediately. The type is `Send` but not `Sync`,
/// so it can move to another thread but never be shared by two.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLock {
    _not_sync: PhantomData<Cell<()>>,
}

#[allow(unsafe_code)]
// SAFETY: NullLock is !Sync, so the mutual-exclusion obligation does not apply.
unsafe impl Lock for NullLock {
    const INIT: Self = Self {
        _not_sync: PhantomData,
    };

    #[inline]
    fn lock(&self) {}

    #[inline]
    fn try_lock(&self) -> bool {
        true
    }

    #[inline]
    unsafe fn unlock(&self) {}
}

/// RAII guard: holds `lock` from construction until drop.
///
/// ```rust
/// use ea_lock::{Lock, LockGuard, NullLock};
///
/// let lock = NullLock::INIT;
/// {
///     let _guard = LockGuard::new(&lock);
///     // critical section
/// }
/// ```
#[must_use = "the lock is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct LockGuard<'a, L: Lock> {
    lock: &'a L,
}

impl<'a, L: Lock> LockGuard<'a, L> {
    /// Acquire `lock`, blocking as long as needed.
    pub fn new(lock: &'a L) -> Self {
        lock.lock();
        Self { lock }
    }

    /// Acquire `lock` if it is free.
    pub fn try_new(lock: &'a L) -> Option<Self> {
        if lock.try_lock() {
            Some(Self { lock })
        } else {
            None
        }
    }
}

impl<L: Lock> Drop for LockGuard<'_, L> {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: a guard only exists while its lock is held.
        unsafe { self.lock.unlock() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingLock {
        calls: Cell<u32>,
        held: Cell<bool>,
    }

    #[allow(unsafe_code)]
    unsafe impl Lock for CountingLock {
        const INIT: Self = Self {
            calls: Cell::new(0),
            held: Cell::new(false),
        };

        fn lock(&self) {
            self.calls.set(self.calls.get() + 1);
            self.held.set(true);
        }

        fn try_lock(&self) -> bool {
            if self.held.get() {
                return false;
            }
            self.lock();
            true
        }

        unsafe fn unlock(&self) {
            self.calls.set(self.calls.get() + 1);
            self.held.set(false);
        }
    }

    #[test]
    fn test_guard_locks_and_unlocks_once() {
        let lock = CountingLock::INIT;
        {
            let _guard = LockGuard::new(&lock);
            assert!(lock.held.get());
        }
        assert!(!lock.held.get());
        assert_eq!(lock.calls.get(), 2);
    }

    #[test]
    fn test_try_new_fails_while_held() {
        let lock = CountingLock::INIT;
        let guard = LockGuard::new(&lock);
        assert!(LockGuard::try_new(&lock).is_none());
        drop(guard);
        assert!(LockGuard::try_new(&lock).is_some());
    }

    #[test]
    fn test_null_lock_is_free() {
        let lock = NullLock::INIT;
        let _outer = LockGuard::new(&lock);
        let _inner = LockGuard::try_new(&lock).expect("null lock never contends");
        assert_eq!(core::mem::size_of::<NullLock>(), 0);
    }
}
