//! # Eä Stack
//!
//! Fixed-capacity, allocation-free LIFO stack.
//!
//! ## Overview
//!
//! [`Stack<T, N>`] stores up to `N` elements inline. Every operation that can
//! fail returns an [`ea_outcome::Result`] carrying a [`StackError`]:
//! pushing onto a full stack yields [`StackError::IsFull`], popping or peeking
//! an empty one yields [`StackError::IsEmpty`]. Nothing panics on overflow or
//! underflow.
//!
//! ## Example
//!
//! ```rust
//! use ea_stack::{Stack, StackError};
//!
//! let mut stack = Stack::<i32, 5>::from([1, 2, 3, 4, 5]);
//! assert!(stack.is_full());
//! assert_eq!(*stack.ctop().unwrap(), 5);
//!
//! assert!(stack.pop().is_ok());
//! assert_eq!(*stack.ctop().unwrap(), 4);
//!
//! *stack.top().unwrap() = 40;
//! assert_eq!(stack.as_slice(), &[1, 2, 3, 40]);
//!
//! let empty = Stack::<i32, 1>::new();
//! assert_eq!(empty.ctop().unwrap_err(), StackError::IsEmpty);
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(clippy::all, clippy::pedantic)]

mod error;
mod stack;

pub use error::StackError;
pub use stack::Stack;
