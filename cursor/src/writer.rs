//! Byte writer for request datagrams and test fixtures.

use crate::error::ValueOutOfRange;
use crate::game_int::{GameInt, ESCAPE_SENTINEL};

/// Accumulates protocol primitives into a datagram.
///
/// Call [`finish`](Self::finish) to get the final byte buffer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `ByteWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes one signed byte.
    pub fn write_fixed_int(&mut self, value: i8) -> &mut Self {
        self.bytes.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Writes a game int in the encoding it already carries.
    pub fn write_encoded(&mut self, value: GameInt) -> &mut Self {
        match value {
            GameInt::Small(v) => self.write_fixed_int(v),
            GameInt::Escaped(v) => self
                .write_fixed_int(ESCAPE_SENTINEL)
                .write_bytes(&v.to_le_bytes()),
        }
    }

    /// Writes a game int.
    ///
    /// # Errors
    ///
    /// Returns [`ValueOutOfRange`] if `value` is below `-127` or above
    /// `65535`.
    pub fn write_game_int(&mut self, value: i32) -> Result<&mut Self, ValueOutOfRange> {
        GameInt::from_value(value)
            .map(|encoded| self.write_encoded(encoded))
            .ok_or(ValueOutOfRange { value })
    }

    /// Writes a string followed by its zero terminator.
    pub fn write_string(&mut self, value: &str) -> &mut Self {
        self.bytes.extend_from_slice(value.as_bytes());
        self.bytes.push(0);
        self
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
