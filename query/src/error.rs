//! Error types for query orchestration.

use std::fmt;

use protocol::DecodeError;

use crate::reassembler::Phase;

/// Result type for reassembler operations.
pub type ReassemblyResult<T> = Result<T, ReassemblyError>;

/// Errors raised by the reassembler itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReassemblyError {
    /// The header datagram could not be decoded.
    Header(DecodeError),

    /// A datagram was fed to the reassembler in the wrong phase.
    OutOfPhase {
        phase: Phase,
        operation: &'static str,
    },

    /// The roster was finalized before every expected record arrived.
    Incomplete { expected: usize, received: usize },
}

/// Errors that abort a player-stats query.
///
/// `E` is the transport's own error type, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError<E> {
    Reassembly(ReassemblyError),
    Transport(E),
}

impl fmt::Display for ReassemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(err) => write!(f, "player stats header: {err}"),
            Self::OutOfPhase { phase, operation } => {
                write!(f, "cannot {operation} while in phase {phase:?}")
            }
            Self::Incomplete { expected, received } => {
                write!(
                    f,
                    "player stats incomplete: received {received} of {expected} records"
                )
            }
        }
    }
}

impl<E: fmt::Display> fmt::Display for StatsError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reassembly(err) => write!(f, "{err}"),
            Self::Transport(err) => write!(f, "transport error: {err}"),
        }
    }
}

impl std::error::Error for ReassemblyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Header(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> std::error::Error for StatsError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reassembly(err) => Some(err),
            Self::Transport(err) => Some(err),
        }
    }
}

impl<E> From<ReassemblyError> for StatsError<E> {
    fn from(err: ReassemblyError) -> Self {
        Self::Reassembly(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_display() {
        let err = ReassemblyError::Incomplete {
            expected: 2,
            received: 1,
        };
        assert!(err.to_string().contains("1 of 2"));
    }

    #[test]
    fn out_of_phase_display() {
        let err = ReassemblyError::OutOfPhase {
            phase: Phase::AwaitHeader,
            operation: "accept record",
        };
        let msg = err.to_string();
        assert!(msg.contains("accept record"));
        assert!(msg.contains("AwaitHeader"));
    }

    #[test]
    fn transport_error_passes_through() {
        let err: StatsError<std::io::Error> = StatsError::Transport(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "timed out",
        ));
        assert!(err.to_string().contains("timed out"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn reassembly_error_converts() {
        let err: StatsError<std::io::Error> = ReassemblyError::Incomplete {
            expected: 1,
            received: 0,
        }
        .into();
        assert!(matches!(
            err,
            StatsError::Reassembly(ReassemblyError::Incomplete { .. })
        ));
    }
}
