//! `parking_lot` as the real mutex behind [`Lock`].

use crate::Lock;

#[allow(unsafe_code)]
// SAFETY: parking_lot's raw mutex provides mutual exclusion across threads.
unsafe impl Lock for parking_lot::RawMutex {
    const INIT: Self = <Self as parking_lot::lock_api::RawMutex>::INIT;

    fn lock(&self) {
        parking_lot::lock_api::RawMutex::lock(self);
    }

    fn try_lock(&self) -> bool {
        parking_lot::lock_api::RawMutex::try_lock(self)
    }

    unsafe fn unlock(&self) {
        // SAFETY: forwarded from the caller, the lock is held.
        unsafe { parking_lot::lock_api::RawMutex::unlock(self) }
    }
}
