//! Server access-mode resolution.

use std::fmt;

use cursor::{ByteCursor, ESCAPE_SENTINEL};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{FieldContext, ProtocolResult};

/// The raw two bytes a server sends for its access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModePair {
    pub first: i8,
    pub second: i8,
}

impl ModePair {
    #[must_use]
    pub const fn new(first: i8, second: i8) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for ModePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Server access-mode category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ServerMode {
    Open,
    Private,
    Match,
    /// Pair outside the known table, kept as received.
    Unknown(ModePair),
}

impl ServerMode {
    /// Classifies a pair that did not start with the match escape.
    #[must_use]
    pub const fn classify(pair: ModePair) -> Self {
        match (pair.first, pair.second) {
            (0 | 1, 1) => Self::Open,
            (64 | 65, 1) => Self::Private,
            _ => Self::Unknown(pair),
        }
    }
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Private => write!(f, "private"),
            Self::Match => write!(f, "match"),
            Self::Unknown(pair) => write!(f, "unknown {pair}"),
        }
    }
}

/// Reads a mode pair (and its escape extension) off the cursor.
///
/// A first byte equal to the escape sentinel means match mode; the
/// following pair is consumed and discarded.
pub fn resolve_mode(
    cursor: &mut ByteCursor<'_>,
    diagnostics: &mut Diagnostics,
) -> ProtocolResult<ServerMode> {
    let first = cursor.take_fixed_int().field("mode pair")?;
    let second = cursor.take_fixed_int().field("mode pair")?;
    if first == ESCAPE_SENTINEL {
        cursor.skip(2).field("match mode extension")?;
        return Ok(ServerMode::Match);
    }

    let mode = ServerMode::classify(ModePair::new(first, second));
    if let ServerMode::Unknown(pair) = mode {
        diagnostics.record(DiagnosticKind::UnknownMode, format!("mode pair {pair}"));
    }
    Ok(mode)
}
