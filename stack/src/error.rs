//! Stack error surface.

use ea_outcome::Payload;

/// Why a stack operation could not be carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackError {
    /// Every slot is in use.
    #[cfg_attr(feature = "std", error("stack is full"))]
    IsFull,
    /// No slot is in use.
    #[cfg_attr(feature = "std", error("stack is empty"))]
    IsEmpty,
}

impl StackError {
    /// Human-readable description.
    pub const fn as_str(self) -> &'static str {
        match self {
            StackError::IsFull => "stack is full",
            StackError::IsEmpty => "stack is empty",
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for StackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Payload for StackError {}
