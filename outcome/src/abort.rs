//! Fatal misuse handling.
//!
//! Calling [`Result::unwrap`](crate::Result::unwrap) on an `Err`, or
//! [`Result::unwrap_err`](crate::Result::unwrap_err) on an `Ok`, is a logic
//! bug in the caller. It is never turned into a sentinel value. Instead the
//! process-wide handler is invoked and control does not come back.
//!
//! The default handler is [`terminate`]. Tests that need to observe a misuse
//! without losing the test runner install [`raise`]:
//!
//! ```rust
//! use ea_outcome::{abort, Err, Result};
//!
//! abort::set_handler(abort::raise);
//!
//! let caught = std::panic::catch_unwind(|| {
//!     let r: Result<u8, u8> = Err::new(7).into();
//!     r.unwrap()
//! });
//! assert!(caught.is_err());
//! ```

use core::fmt;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::config::CONFIG;

/// Accessor that was called on the wrong side of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Misuse {
    /// `unwrap` on an `Err` result.
    Unwrap,
    /// `unwrap_err` on an `Ok` result.
    UnwrapErr,
}

impl Misuse {
    /// Short diagnostic naming the misused accessor.
    pub const fn message(self) -> &'static str {
        match self {
            Misuse::Unwrap => "called `Result::unwrap()` on an `Err` value",
            Misuse::UnwrapErr => "called `Result::unwrap_err()` on an `Ok` value",
        }
    }
}

impl fmt::Display for Misuse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Misuse handler. Must not return.
pub type Handler = fn(Misuse) -> !;

// Null selects `terminate`. Every other value was stored from a `Handler`.
static HANDLER: AtomicPtr<()> = AtomicPtr::new(core::ptr::null_mut());

/// Install `handler` for every subsequent misuse and return the previous one.
pub fn set_handler(handler: Handler) -> Handler {
    log::debug!("installing misuse handler");
    let previous = HANDLER.swap(handler as *mut (), Ordering::AcqRel);
    decode(previous)
}

/// Restore the default handler.
pub fn reset_handler() {
    HANDLER.store(core::ptr::null_mut(), Ordering::Release);
}

/// Currently installed handler.
pub fn handler() -> Handler {
    decode(HANDLER.load(Ordering::Acquire))
}

#[allow(unsafe_code)]
fn decode(raw: *mut ()) -> Handler {
    if raw.is_null() {
        return terminate;
    }
    // SAFETY: non-null values in HANDLER only come from `set_handler`, which
    // stores a `Handler` function pointer cast to `*mut ()`.
    unsafe { core::mem::transmute::<*mut (), Handler>(raw) }
}

/// Enter the misuse path.
#[cold]
#[inline(never)]
pub(crate) fn fatal(misuse: Misuse) -> ! {
    handler()(misuse)
}

/// Default handler: emit the diagnostic, then leave.
///
/// Hosted builds exit with [`EXIT_FAILURE`](crate::config::EXIT_FAILURE).
/// Builds with `no-exit`, or without `std`, halt instead.
pub fn terminate(misuse: Misuse) -> ! {
    if CONFIG.print_diagnostics {
        report(misuse);
    }
    if CONFIG.exit_process {
        exit();
    }
    halt(misuse)
}

/// Spin forever without reporting.
pub fn halt(_misuse: Misuse) -> ! {
    loop {
        core::hint::spin_loop();
    }
}

/// Panic with the diagnostic.
///
/// Meant for test harnesses, which catch the unwind and assert on the message.
pub fn raise(misuse: Misuse) -> ! {
    panic!("{misuse}")
}

// Hosted builds own stderr; elsewhere the installed logger decides.
#[cfg(feature = "std")]
fn report(misuse: Misuse) {
    eprintln!("{misuse}");
}

#[cfg(not(feature = "std"))]
fn report(misuse: Misuse) {
    log::error!("{misuse}");
}

#[cfg(feature = "std")]
fn exit() {
    std::process::exit(crate::config::EXIT_FAILURE)
}

// `CONFIG.exit_process` is never set without `std`.
#[cfg(not(feature = "std"))]
fn exit() {}
