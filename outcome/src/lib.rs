//! # Eä Outcome
//!
//! Allocation-free, exception-free outcome type for constrained targets.
//!
//! ## Overview
//!
//! A [`Result<T, E>`] holds exactly one [`Ok<T>`] or [`Err<E>`], chosen when
//! the fallible operation concludes and fixed from then on. Either side may be
//! the unit type `()`, meaning "no payload". Accessors for a side that carries
//! no payload do not exist for that shape: they are bounded on [`Payload`],
//! which `()` does not implement, so the misuse is a compile error.
//!
//! Extracting the side that is not active (`unwrap` on an `Err`, `unwrap_err`
//! on an `Ok`) is a logic bug in the caller. It is routed to the process-wide
//! misuse [`abort`] handler which never returns. The default handler prints a
//! diagnostic and exits, or halts on targets built with `no-exit`.
//!
//! ## Example
//!
//! ```rust
//! use ea_outcome::{Err, Ok, Result};
//!
//! fn halve(n: u32) -> Result<u32, &'static str> {
//!     if n % 2 == 0 {
//!         Ok::new(n / 2).into()
//!     } else {
//!         Err::new("odd").into()
//!     }
//! }
//!
//! assert_eq!(halve(8).unwrap(), 4);
//! assert_eq!(halve(3).get_err(), Some("odd"));
//! assert_eq!(halve(3).unwrap_or_else(|e| e.len() as u32), 3);
//! ```
//!
//! A unit success side has no `unwrap`:
//!
//! ```compile_fail
//! use ea_outcome::{Ok, Result};
//!
//! let done: Result<(), u8> = Ok::unit().into();
//! done.unwrap();
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(clippy::all, clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod abort;
pub mod config;
mod err;
mod ok;
mod payload;
mod result;

pub use abort::Misuse;
pub use err::Err;
pub use ok::Ok;
pub use payload::Payload;
pub use result::{Outcome, Result};
