//! Player-stats header datagram decoding.

use cursor::ByteCursor;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{DecodeError, FieldContext, LimitKind, ProtocolResult};
use crate::header::{skip_response_header, take_subtype, SUBTYPE_CLIENT_IDS};
use crate::limits::Limits;

/// First datagram of a player-stats response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsHeader {
    /// Raw response-subtype pair.
    pub subtype: (i8, i8),
    /// Client ids in the order their records will arrive.
    pub client_ids: Vec<i32>,
}

impl StatsHeader {
    /// Returns `true` if the subtype carried the client-id marker.
    #[must_use]
    pub const fn subtype_matches(&self) -> bool {
        self.subtype.1 == SUBTYPE_CLIENT_IDS
    }
}

/// Decodes the header datagram of a player-stats response.
///
/// An unexpected subtype is recorded and decoding continues; servers vary.
pub fn decode_stats_header(
    buf: &[u8],
    limits: &Limits,
    diagnostics: &mut Diagnostics,
) -> ProtocolResult<StatsHeader> {
    if buf.len() > limits.max_datagram_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::DatagramBytes,
            limit: limits.max_datagram_bytes,
            actual: buf.len(),
        });
    }

    let mut cursor = ByteCursor::new(buf);
    skip_response_header(&mut cursor)?;
    let subtype = take_subtype(&mut cursor)?;
    if subtype.1 != SUBTYPE_CLIENT_IDS {
        diagnostics.record(
            DiagnosticKind::SubtypeMismatch,
            format!(
                "stats header subtype {subtype:?}, expected second byte {SUBTYPE_CLIENT_IDS}"
            ),
        );
    }

    let mut client_ids = Vec::new();
    while !cursor.is_empty() {
        if client_ids.len() >= limits.max_players {
            return Err(DecodeError::LimitsExceeded {
                kind: LimitKind::ClientIds,
                limit: limits.max_players,
                actual: client_ids.len() + 1,
            });
        }
        client_ids.push(cursor.take_int().field("client id")?);
    }

    Ok(StatsHeader {
        subtype,
        client_ids,
    })
}
