//! Server info and name list decoding.

use cursor::ByteCursor;

use crate::diagnostics::Diagnostics;
use crate::error::{DecodeError, FieldContext, LimitKind, ProtocolResult};
use crate::header::skip_response_header;
use crate::limits::Limits;
use crate::mode::{resolve_mode, ServerMode};

/// Server state decoded from one name-list response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ServerSnapshot {
    pub game_mode: i32,
    pub mode: ServerMode,
    pub connected_clients: i32,
    pub minutes_remaining: i32,
    pub map_name: String,
    pub description: String,
    pub max_clients: i32,
    /// Connected player names in server order. Duplicates are kept.
    pub players: Vec<String>,
}

/// Decodes a name-list response datagram.
pub fn decode_server_info(buf: &[u8], limits: &Limits) -> ProtocolResult<ServerSnapshot> {
    decode_server_info_with_diagnostics(buf, limits, &mut Diagnostics::new())
}

/// Decodes a name-list response datagram, recording tolerated variance.
pub fn decode_server_info_with_diagnostics(
    buf: &[u8],
    limits: &Limits,
    diagnostics: &mut Diagnostics,
) -> ProtocolResult<ServerSnapshot> {
    if buf.len() > limits.max_datagram_bytes {
        return Err(DecodeError::LimitsExceeded {
            kind: LimitKind::DatagramBytes,
            limit: limits.max_datagram_bytes,
            actual: buf.len(),
        });
    }

    let mut cursor = ByteCursor::new(buf);
    skip_response_header(&mut cursor)?;

    let game_mode = cursor.take_int().field("game mode")?;
    let connected_clients = cursor.take_int().field("client count")?;
    let minutes_remaining = cursor.take_int().field("minutes remaining")?;
    let map_name = cursor.take_string().into_owned();
    let description = cursor.take_string().into_owned();
    let max_clients = cursor.take_int().field("max clients")?;
    let mode = resolve_mode(&mut cursor, diagnostics)?;

    let mut players = Vec::new();
    while !at_name_list_end(cursor.rest()) {
        if players.len() >= limits.max_players {
            return Err(DecodeError::LimitsExceeded {
                kind: LimitKind::PlayerNames,
                limit: limits.max_players,
                actual: players.len() + 1,
            });
        }
        players.push(cursor.take_string().into_owned());
    }
    log::debug!(
        target: "cubequery",
        "server info: map {map_name}, {} names, mode {mode}",
        players.len()
    );

    Ok(ServerSnapshot {
        game_mode,
        mode,
        connected_clients,
        minutes_remaining,
        map_name,
        description,
        max_clients,
        players,
    })
}

/// The name list ends at the end of the datagram or at a lone zero byte.
fn at_name_list_end(rest: &[u8]) -> bool {
    matches!(rest, [] | [0])
}
