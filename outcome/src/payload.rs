//! Marker for types that count as an outcome payload.

use core::cmp::Ordering;
use core::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use core::time::Duration;

/// A type that carries information and may be extracted from an outcome.
///
/// The unit type `()` is the "no payload" marker and intentionally does not
/// implement this trait. Every accessor that hands out a payload is bounded on
/// `Payload`, so calling it on a unit side fails to compile.
///
/// Types defined downstream opt in with an empty impl:
///
/// ```rust
/// use ea_outcome::{Ok, Payload, Result};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Reading(u16);
///
/// impl Payload for Reading {}
///
/// let r: Result<Reading, ()> = Ok::new(Reading(7)).into();
/// assert_eq!(r.unwrap(), Reading(7));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an outcome payload",
    label = "no payload can be extracted from this side",
    note = "`()` marks a side without payload; implement `Payload` for your own types"
)]
pub trait Payload {}

macro_rules! payload {
    ($($ty:ty),* $(,)?) => {
        $(impl Payload for $ty {})*
    };
}

payload!(
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str,
    Ordering, Duration,
);

payload!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

impl<T: ?Sized> Payload for &T {}
impl<T: ?Sized> Payload for &mut T {}
impl<T, const N: usize> Payload for [T; N] {}
impl<T> Payload for [T] {}
impl<T> Payload for Option<T> {}
impl<T, E> Payload for core::result::Result<T, E> {}
impl<T> Payload for core::cell::Cell<T> {}
impl<T: ?Sized> Payload for core::cell::RefCell<T> {}

macro_rules! payload_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(impl<$($name),+> Payload for ($($name,)+) {})*
    };
}

payload_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, F),
    (A, B, C, D, F, G),
);

#[cfg(feature = "alloc")]
mod alloc_payloads {
    use super::Payload;
    use alloc::{boxed::Box, collections::VecDeque, rc::Rc, string::String, vec::Vec};

    impl Payload for String {}
    impl<T> Payload for Vec<T> {}
    impl<T> Payload for VecDeque<T> {}
    impl<T: ?Sized> Payload for Box<T> {}
    impl<T: ?Sized> Payload for Rc<T> {}
    #[cfg(target_has_atomic = "ptr")]
    impl<T: ?Sized> Payload for alloc::sync::Arc<T> {}
}
