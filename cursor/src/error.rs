//! Error types for cursor operations.

use std::fmt;

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Errors that can occur while reading protocol primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Attempted to read past the end of the buffer.
    Truncated {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },
}

/// A value that neither game-int branch can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueOutOfRange {
    /// The value that was out of range.
    pub value: i32,
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
        }
    }
}

impl std::error::Error for CursorError {}

impl fmt::Display for ValueOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value {} cannot be encoded as a game int", self.value)
    }
}

impl std::error::Error for ValueOutOfRange {}
