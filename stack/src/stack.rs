//! Fixed-capacity LIFO storage.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;

use ea_outcome::{Err, Ok, Payload, Result};

use crate::StackError;

/// Bounded last-in-first-out stack of at most `N` elements.
///
/// Storage is `N` inline slots. Slots `[0, len)` hold live elements; the rest
/// are uninitialised and never read. Overflow and underflow are reported as
/// [`StackError`] results, never by panicking.
///
/// ```rust
/// use ea_stack::{Stack, StackError};
///
/// let mut stack = Stack::<i32, 2>::new();
/// assert!(stack.push(1).is_ok());
/// assert!(stack.push(2).is_ok());
/// assert_eq!(stack.push(3).unwrap_err(), StackError::IsFull);
/// assert_eq!(*stack.ctop().unwrap(), 2);
/// ```
///
/// A zero capacity is rejected when the stack is instantiated:
///
/// ```compile_fail
/// let _ = ea_stack::Stack::<u8, 0>::new();
/// ```
pub struct Stack<T, const N: usize> {
    slots: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> Stack<T, N> {
    /// Number of elements the stack can hold.
    pub const CAPACITY: usize = N;

    const NON_ZERO_CAPACITY: () = assert!(N > 0, "stack capacity must be greater than zero");

    /// Empty stack.
    pub const fn new() -> Self {
        let () = Self::NON_ZERO_CAPACITY;
        Self {
            slots: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Stack holding the elements of `iter`, first element at the bottom.
    ///
    /// Fails with [`StackError::IsFull`] if `iter` yields more than `N`
    /// elements. Elements already taken are dropped.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, StackError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut stack = Self::new();
        for value in iter {
            if stack.push(value).is_err() {
                return Err::new(StackError::IsFull).into();
            }
        }
        Ok::new(stack).into()
    }

    /// Number of elements the stack can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` if no element is stored.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if every slot is in use.
    pub const fn is_full(&self) -> bool {
        self.len >= N
    }

    /// Place `value` on top.
    ///
    /// On a full stack returns [`StackError::IsFull`] and drops `value`.
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        self.emplace(|| value)
    }

    /// Construct a new top element directly in its slot.
    ///
    /// `construct` only runs if there is room; on a full stack returns
    /// [`StackError::IsFull`] without calling it.
    pub fn emplace<F>(&mut self, construct: F) -> Result<(), StackError>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            return Err::new(StackError::IsFull).into();
        }
        self.slots[self.len].write(construct());
        self.len += 1;
        Ok::unit().into()
    }

    /// Drop the top element in place.
    ///
    /// On an empty stack returns [`StackError::IsEmpty`].
    #[allow(unsafe_code)]
    pub fn pop(&mut self) -> Result<(), StackError> {
        if self.is_empty() {
            return Err::new(StackError::IsEmpty).into();
        }
        self.len -= 1;
        // SAFETY: slot `len` was live before the decrement and is now outside
        // the live range, so it is dropped exactly once.
        unsafe {
            self.slots[self.len].assume_init_drop();
        }
        Ok::unit().into()
    }

    /// Remove the top element and hand it to the caller.
    #[allow(unsafe_code)]
    pub fn pop_value(&mut self) -> Result<T, StackError> {
        if self.is_empty() {
            return Err::new(StackError::IsEmpty).into();
        }
        self.len -= 1;
        // SAFETY: as in `pop`; ownership moves out instead of dropping.
        let value = unsafe { self.slots[self.len].assume_init_read() };
        Ok::new(value).into()
    }

    /// Mutable reference to the top element.
    pub fn top(&mut self) -> Result<&mut T, StackError> {
        match self.as_mut_slice().last_mut() {
            Some(top) => Ok::new(top).into(),
            None => Err::new(StackError::IsEmpty).into(),
        }
    }

    /// Shared reference to the top element.
    pub fn ctop(&self) -> Result<&T, StackError> {
        match self.as_slice().last() {
            Some(top) => Ok::new(top).into(),
            None => Err::new(StackError::IsEmpty).into(),
        }
    }

    /// Live elements, bottom first.
    #[allow(unsafe_code)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised and `MaybeUninit<T>`
        // has the layout of `T`.
        unsafe {
            core::slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len)
        }
    }

    /// Live elements, bottom first, mutably.
    #[allow(unsafe_code)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`.
        unsafe {
            core::slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len)
        }
    }

    /// Iterate from bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Drop every element.
    #[allow(unsafe_code)]
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: `live` covered exactly the initialised slots, which are now
        // outside the live range. A panicking destructor leaks the remainder
        // instead of dropping twice.
        unsafe {
            ptr::drop_in_place(live);
        }
    }
}

impl<T, const N: usize> Drop for Stack<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Default for Stack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T, N> {
    /// Full stack, `values[0]` at the bottom.
    fn from(values: [T; N]) -> Self {
        let mut stack = Self::new();
        for value in values {
            stack.slots[stack.len].write(value);
            stack.len += 1;
        }
        stack
    }
}

impl<T: Clone, const N: usize> Clone for Stack<T, N> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for value in self.as_slice() {
            copy.slots[copy.len].write(value.clone());
            copy.len += 1;
        }
        copy
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Stack<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Stack<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for Stack<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a Stack<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> Payload for Stack<T, N> {}
