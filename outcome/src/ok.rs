//! Success side of an outcome.

use crate::Payload;

/// Successful outcome, optionally carrying a payload.
///
/// `Ok<()>` is the payload-less success. It has no accessors, and all
/// instances compare equal. `Ok<T>` for a [`Payload`] type `T` compares by
/// payload.
///
/// None of the accessors exist on the unit success:
///
/// ```compile_fail
/// let _ = ea_outcome::Ok::unit().value();
/// ```
///
/// ```compile_fail
/// let _ = ea_outcome::Ok::unit().get();
/// ```
///
/// ```compile_fail
/// let mut done = ea_outcome::Ok::unit();
/// let _ = done.get_mut();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ok<T>(T);

impl<T> Ok<T> {
    /// Wrap a success value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    // Unbounded extraction for conversions that keep the shape.
    pub(crate) fn take(self) -> T {
        self.0
    }
}

impl Ok<()> {
    /// The payload-less success.
    pub const fn unit() -> Self {
        Self(())
    }
}

impl<T: Payload> Ok<T> {
    /// Copy of the payload.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.0.clone()
    }

    /// Shared reference to the payload.
    pub const fn get(&self) -> &T {
        &self.0
    }

    /// Mutable reference to the payload.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consume and return the payload.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Payload> Payload for Ok<T> {}
