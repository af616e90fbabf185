//! The seam to the transport that delivers datagrams.

use std::collections::VecDeque;
use std::fmt;

/// Delivers one received datagram per call.
///
/// Implementations own the socket, the timeout and any retry policy. A
/// timeout is reported as an error; the reassembler never retries.
pub trait DatagramSource {
    type Error;

    /// Blocks until the next datagram arrives or the transport gives up.
    fn recv_datagram(&mut self) -> Result<Vec<u8>, Self::Error>;
}

impl<S: DatagramSource + ?Sized> DatagramSource for &mut S {
    type Error = S::Error;

    fn recv_datagram(&mut self) -> Result<Vec<u8>, Self::Error> {
        (**self).recv_datagram()
    }
}

/// The replay ran out of captured datagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayExhausted {
    /// Datagrams delivered before running dry.
    pub delivered: usize,
}

impl fmt::Display for ReplayExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no more captured datagrams after {} delivered",
            self.delivered
        )
    }
}

impl std::error::Error for ReplayExhausted {}

/// Replays previously captured datagrams in order.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    pending: VecDeque<Vec<u8>>,
    delivered: usize,
}

impl Replay {
    #[must_use]
    pub fn new<I>(datagrams: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            pending: datagrams.into_iter().collect(),
            delivered: 0,
        }
    }

    /// Number of datagrams not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl DatagramSource for Replay {
    type Error = ReplayExhausted;

    fn recv_datagram(&mut self) -> Result<Vec<u8>, Self::Error> {
        let datagram = self.pending.pop_front().ok_or(ReplayExhausted {
            delivered: self.delivered,
        })?;
        self.delivered += 1;
        Ok(datagram)
    }
}
