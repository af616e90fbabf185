//! The protocol's sentinel-escaped integer.

/// Byte value that announces an escaped 16-bit payload.
pub const ESCAPE_SENTINEL: i8 = -128;

/// Largest value that fits in the single-byte branch.
pub const SMALL_MAX: i32 = 127;

/// Smallest value that fits in the single-byte branch.
///
/// `-128` is reserved for [`ESCAPE_SENTINEL`].
pub const SMALL_MIN: i32 = -127;

/// A decoded "game int".
///
/// On the wire this is either one signed byte, or the sentinel byte followed
/// by a little-endian `u16`. The two branches stay distinct so callers can
/// tell which encoding the server chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInt {
    /// Value carried in a single signed byte.
    Small(i8),
    /// Value carried in the two bytes after the sentinel.
    Escaped(u16),
}

impl GameInt {
    /// Chooses the encoding for `value`, or `None` if neither branch can hold it.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        if (SMALL_MIN..=SMALL_MAX).contains(&value) {
            i8::try_from(value).ok().map(Self::Small)
        } else {
            u16::try_from(value).ok().map(Self::Escaped)
        }
    }

    /// Returns the integer value.
    #[must_use]
    pub fn value(self) -> i32 {
        match self {
            Self::Small(v) => i32::from(v),
            Self::Escaped(v) => i32::from(v),
        }
    }

    /// Returns `true` if the value used the sentinel escape.
    #[must_use]
    pub const fn is_escaped(self) -> bool {
        matches!(self, Self::Escaped(_))
    }

    /// Number of bytes this value occupies on the wire.
    #[must_use]
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Small(_) => 1,
            Self::Escaped(_) => 3,
        }
    }
}

impl From<GameInt> for i32 {
    fn from(value: GameInt) -> Self {
        value.value()
    }
}
