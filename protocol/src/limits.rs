//! Configurable limits for bounded decoding.

/// Decode limits for response datagrams.
///
/// These limits are enforced while decoding untrusted datagrams so a hostile
/// or broken server cannot make the decoder build unbounded lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum datagram size in bytes.
    pub max_datagram_bytes: usize,

    /// Maximum number of player names in a name list, and of client ids in a
    /// player-stats header.
    pub max_players: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Largest possible UDP payload.
            max_datagram_bytes: 65_535,

            // Servers cap clients well below this.
            max_players: 256,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_datagram_bytes: 512,
            max_players: 16,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_datagram_bytes: usize::MAX,
            max_players: usize::MAX,
        }
    }
}
