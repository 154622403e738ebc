//! Lazily evaluated, lock-guarded result cache.

use core::cell::UnsafeCell;
use core::fmt;

use crate::{Lock, LockGuard, NullLock};

/// Caches the result of a nullary callable.
///
/// The first [`get`](Self::get) evaluates the callable and stores the value;
/// later calls hand out clones until [`reset`](Self::reset) discards it.
/// Access is serialised by `L`. With the default [`NullLock`] the cache is
/// confined to one thread; with a `Sync` lock such as
/// `parking_lot::RawMutex` it can be shared.
///
/// ```rust
/// use core::cell::Cell;
/// use ea_lock::CachedCallable;
///
/// let calls = Cell::new(0);
/// let cache = CachedCallable::new(|| {
///     calls.set(calls.get() + 1);
///     42
/// });
///
/// assert_eq!(cache.get(), 42);
/// assert_eq!(cache.get(), 42);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct CachedCallable<T, F, L = NullLock> {
    callable: F,
    cached: UnsafeCell<Option<T>>,
    lock: L,
}

impl<T, F> CachedCallable<T, F> {
    /// Wrap `callable` with an empty, unsynchronised cache.
    pub const fn new(callable: F) -> Self
    where
        F: Fn() -> T,
    {
        Self::with_lock(callable)
    }
}

impl<T, F, L: Lock> CachedCallable<T, F, L> {
    /// Wrap `callable` with an empty cache guarded by `L`.
    ///
    /// ```rust
    /// # #[cfg(feature = "std")]
    /// # fn main() {
    /// use ea_lock::{CachedCallable, RawMutex};
    ///
    /// let cache = CachedCallable::<_, _, RawMutex>::with_lock(|| 7u8);
    /// std::thread::scope(|s| {
    ///     s.spawn(|| assert_eq!(cache.get(), 7));
    ///     s.spawn(|| assert_eq!(cache.get(), 7));
    /// });
    /// # }
    /// # #[cfg(not(feature = "std"))]
    /// # fn main() {}
    /// ```
    pub const fn with_lock(callable: F) -> Self
    where
        F: Fn() -> T,
    {
        Self {
            callable,
            cached: UnsafeCell::new(None),
            lock: L::INIT,
        }
    }

    /// Discard the cached value. The next `get` re-evaluates.
    pub fn reset(&self) {
        let _guard = LockGuard::new(&self.lock);
        drop(self.swap(None));
    }

    /// `true` if a value is currently cached.
    pub fn is_cached(&self) -> bool {
        let _guard = LockGuard::new(&self.lock);
        let value = self.swap(None);
        let cached = value.is_some();
        drop(self.swap(value));
        cached
    }

    // Only ever moves values in and out of the slot, so no user code (clone,
    // drop, the callable) runs while the slot is borrowed. Must be called with
    // the lock held.
    #[allow(unsafe_code)]
    fn swap(&self, value: Option<T>) -> Option<T> {
        // SAFETY: the caller holds `self.lock`. For a Sync lock that excludes
        // other threads; for a !Sync lock `Self` is !Sync. The mutable borrow
        // ends before this function returns, so re-entrant calls from the
        // callable, `clone` or `drop` never overlap with it.
        unsafe { core::mem::replace(&mut *self.cached.get(), value) }
    }
}

impl<T, F, L> CachedCallable<T, F, L>
where
    T: Clone,
    F: Fn() -> T,
    L: Lock,
{
    /// Cached value, evaluating the callable first if the cache is empty.
    pub fn get(&self) -> T {
        let _guard = LockGuard::new(&self.lock);
        if let Some(value) = self.swap(None) {
            let copy = value.clone();
            drop(self.swap(Some(value)));
            return copy;
        }

        log::trace!("cache empty, evaluating callable");
        let value = (self.callable)();
        drop(self.swap(Some(value.clone())));
        value
    }
}

// SAFETY: every access to `cached` goes through `swap` under `lock`, and a
// Sync `Lock` guarantees mutual exclusion. Values cross threads by move, so
// `T: Send` suffices; the callable is shared, so `F: Sync`.
#[allow(unsafe_code)]
unsafe impl<T: Send, F: Sync, L: Lock + Sync> Sync for CachedCallable<T, F, L> {}

impl<T, F, L> fmt::Debug for CachedCallable<T, F, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedCallable").finish_non_exhaustive()
    }
}
