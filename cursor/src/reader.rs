//! Byte cursor with bounded operations.

use std::borrow::Cow;

use crate::error::{CursorError, CursorResult};
use crate::game_int::{GameInt, ESCAPE_SENTINEL};

/// A cursor over one received datagram.
///
/// All take operations are bounds-checked and return errors on failure.
/// A failed take leaves the cursor where it was; the cursor never panics
/// on malformed input.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a new `ByteCursor` at the start of `data`.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes remaining.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread bytes without consuming them.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Takes the next `n` bytes.
    pub fn take_bytes(&mut self, n: usize) -> CursorResult<&'a [u8]> {
        let available = self.remaining();
        if n > available {
            return Err(CursorError::Truncated {
                requested: n,
                available,
            });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Takes exactly `N` bytes as an array.
    pub fn take_array<const N: usize>(&mut self) -> CursorResult<[u8; N]> {
        let bytes = self.take_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Takes one signed byte.
    pub fn take_fixed_int(&mut self) -> CursorResult<i8> {
        let [byte] = self.take_array::<1>()?;
        Ok(i8::from_le_bytes([byte]))
    }

    /// Takes one game int.
    ///
    /// Either a single signed byte, or [`ESCAPE_SENTINEL`] followed by a
    /// little-endian `u16`.
    pub fn take_game_int(&mut self) -> CursorResult<GameInt> {
        let start = self.pos;
        let lead = self.take_fixed_int()?;
        if lead != ESCAPE_SENTINEL {
            return Ok(GameInt::Small(lead));
        }
        match self.take_array::<2>() {
            Ok(bytes) => Ok(GameInt::Escaped(u16::from_le_bytes(bytes))),
            Err(err) => {
                self.pos = start;
                Err(match err {
                    CursorError::Truncated { available, .. } => CursorError::Truncated {
                        requested: 3,
                        available: available + 1,
                    },
                    other => other,
                })
            }
        }
    }

    /// Takes one game int and widens it to `i32`.
    pub fn take_int(&mut self) -> CursorResult<i32> {
        self.take_game_int().map(GameInt::value)
    }

    /// Takes a zero-terminated string.
    ///
    /// The terminator is consumed but not returned. Running out of bytes
    /// acts as an implicit terminator since truncated datagrams may lack one.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn take_string(&mut self) -> Cow<'a, str> {
        let rest = self.rest();
        let (text, consumed) = match rest.iter().position(|&b| b == 0) {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        String::from_utf8_lossy(text)
    }

    /// Skips `n` bytes.
    pub fn skip(&mut self, n: usize) -> CursorResult<()> {
        self.take_bytes(n).map(|_| ())
    }
}
