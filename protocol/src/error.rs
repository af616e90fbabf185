//! Error types for response decoding.

use std::fmt;

use cursor::{CursorError, CursorResult};

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a response datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A required field ran past the end of the datagram.
    Truncated {
        field: &'static str,
        requested: usize,
        available: usize,
    },

    /// Player record is shorter than the smallest well-formed record.
    IncompleteRecord { actual: usize, required: usize },

    /// Limits exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },
}

/// Specific decode limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    DatagramBytes,
    PlayerNames,
    ClientIds,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                field,
                requested,
                available,
            } => {
                write!(
                    f,
                    "truncated {field}: need {requested} bytes, have {available}"
                )
            }
            Self::IncompleteRecord { actual, required } => {
                write!(
                    f,
                    "incomplete player record: {actual} bytes, need at least {required}"
                )
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DatagramBytes => "datagram bytes",
            Self::PlayerNames => "player names",
            Self::ClientIds => "client ids",
        };
        write!(f, "{name}")
    }
}

impl std::error::Error for DecodeError {}

/// Attaches the name of the field being read to a cursor failure.
pub(crate) trait FieldContext<T> {
    fn field(self, name: &'static str) -> ProtocolResult<T>;
}

impl<T> FieldContext<T> for CursorResult<T> {
    fn field(self, name: &'static str) -> ProtocolResult<T> {
        self.map_err(|err| match err {
            CursorError::Truncated {
                requested,
                available,
            } => DecodeError::Truncated {
                field: name,
                requested,
                available,
            },
        })
    }
}
