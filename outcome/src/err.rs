//! Failure side of an outcome.

use crate::Payload;

/// Failed outcome, optionally carrying an error payload.
///
/// Mirrors [`Ok`](crate::Ok): `Err<()>` is the payload-less failure and has
/// no accessors.
///
/// ```compile_fail
/// let _ = ea_outcome::Err::unit().get();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Err<E>(E);

impl<E> Err<E> {
    /// Wrap an error value.
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    // Unbounded extraction for conversions that keep the shape.
    pub(crate) fn take(self) -> E {
        self.0
    }
}

impl Err<()> {
    /// The payload-less failure.
    pub const fn unit() -> Self {
        Self(())
    }
}

impl<E: Payload> Err<E> {
    /// Copy of the error payload.
    pub fn value(&self) -> E
    where
        E: Clone,
    {
        self.0.clone()
    }

    /// Shared reference to the error payload.
    pub const fn get(&self) -> &E {
        &self.0
    }

    /// Mutable reference to the error payload.
    pub fn get_mut(&mut self) -> &mut E {
        &mut self.0
    }

    /// Consume and return the error payload.
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: Payload> Payload for Err<E> {}
