//! The outcome engine.

use crate::abort::{self, Misuse};
use crate::{Err, Ok, Payload};

/// Either side of a concluded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// Success.
    Ok(Ok<T>),
    /// Failure.
    Err(Err<E>),
}

/// Outcome of a fallible operation.
///
/// Exactly one side is active. It is chosen at construction and no method
/// changes it afterwards. Which accessors exist depends on the shape:
///
/// | shape              | `get_ok` / `unwrap` / `unwrap_or` | `get_err` / `unwrap_err` | `unwrap_or_else` |
/// |--------------------|:---:|:---:|:---:|
/// | `Result<T, E>`     | yes | yes | yes |
/// | `Result<(), E>`    |     | yes |     |
/// | `Result<T, ()>`    | yes |     |     |
/// | `Result<(), ()>`   |     |     |     |
///
/// `is_ok` and `is_err` are always available.
///
/// ```compile_fail
/// use ea_outcome::{Err, Result};
///
/// let failed: Result<u8, ()> = Err::unit().into();
/// failed.get_err();
/// ```
///
/// ```compile_fail
/// use ea_outcome::{Ok, Result};
///
/// let r: Result<u8, ()> = Ok::new(1).into();
/// r.unwrap_or_else(|_| 0);
/// ```
///
/// ```compile_fail
/// use ea_outcome::{Ok, Result};
///
/// let r: Result<u8, ()> = Ok::new(1).into();
/// r.unwrap_err();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub struct Result<T, E> {
    outcome: Outcome<T, E>,
}

impl<T, E> Result<T, E> {
    /// Build a result from an explicit outcome.
    pub const fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self { outcome }
    }

    /// The held outcome.
    pub const fn outcome(&self) -> &Outcome<T, E> {
        &self.outcome
    }

    /// Consume the result and return the held outcome.
    pub fn into_outcome(self) -> Outcome<T, E> {
        self.outcome
    }

    /// `true` if the success side is active.
    pub const fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Ok(_))
    }

    /// `true` if the failure side is active.
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Convert into the core library result, for use with `?`.
    ///
    /// ```rust
    /// use ea_outcome::{Err, Result};
    ///
    /// fn step() -> core::result::Result<(), &'static str> {
    ///     let r: Result<(), &'static str> = Err::new("busy").into();
    ///     r.into_std()?;
    ///     unreachable!()
    /// }
    ///
    /// assert_eq!(step(), core::result::Result::Err("busy"));
    /// ```
    pub fn into_std(self) -> core::result::Result<T, E> {
        match self.outcome {
            Outcome::Ok(ok) => core::result::Result::Ok(ok.take()),
            Outcome::Err(err) => core::result::Result::Err(err.take()),
        }
    }
}

impl<T: Payload, E> Result<T, E> {
    /// Copy of the success payload, `None` if the failure side is active.
    pub fn get_ok(&self) -> Option<T>
    where
        T: Clone,
    {
        match &self.outcome {
            Outcome::Ok(ok) => Some(ok.value()),
            Outcome::Err(_) => None,
        }
    }

    /// Success payload.
    ///
    /// A failure result here is a logic bug: the misuse handler runs and
    /// this call does not return.
    pub fn unwrap(self) -> T {
        match self.outcome {
            Outcome::Ok(ok) => ok.into_inner(),
            Outcome::Err(_) => abort::fatal(Misuse::Unwrap),
        }
    }

    /// Success payload, or `default` if the failure side is active.
    pub fn unwrap_or(self, default: T) -> T {
        match self.outcome {
            Outcome::Ok(ok) => ok.into_inner(),
            Outcome::Err(_) => default,
        }
    }
}

impl<T, E: Payload> Result<T, E> {
    /// Copy of the error payload, `None` if the success side is active.
    pub fn get_err(&self) -> Option<E>
    where
        E: Clone,
    {
        match &self.outcome {
            Outcome::Ok(_) => None,
            Outcome::Err(err) => Some(err.value()),
        }
    }

    /// Error payload.
    ///
    /// A success result here is a logic bug: the misuse handler runs and
    /// this call does not return.
    pub fn unwrap_err(self) -> E {
        match self.outcome {
            Outcome::Ok(_) => abort::fatal(Misuse::UnwrapErr),
            Outcome::Err(err) => err.into_inner(),
        }
    }
}

impl<T: Payload, E: Payload> Result<T, E> {
    /// Success payload, or `fallback` applied to the error payload.
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.outcome {
            Outcome::Ok(ok) => ok.into_inner(),
            Outcome::Err(err) => fallback(err.into_inner()),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<T, E> From<Ok<T>> for Result<T, E> {
    fn from(ok: Ok<T>) -> Self {
        Self::from_outcome(Outcome::Ok(ok))
    }
}

impl<T, E> From<Err<E>> for Result<T, E> {
    fn from(err: Err<E>) -> Self {
        Self::from_outcome(Outcome::Err(err))
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            core::result::Result::Ok(value) => Ok::new(value).into(),
            core::result::Result::Err(error) => Err::new(error).into(),
        }
    }
}

impl<T, E> Payload for Result<T, E> {}
