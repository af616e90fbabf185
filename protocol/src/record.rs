//! Player statistics record decoding.

use std::fmt;
use std::net::Ipv4Addr;

use cursor::ByteCursor;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::{DecodeError, FieldContext, ProtocolResult};
use crate::header::{skip_response_header, take_subtype, SUBTYPE_PLAYER_STATS};

/// Smallest datagram that can hold a player record.
///
/// Servers occasionally emit shorter, truncated records.
pub const MIN_RECORD_LEN: usize = 20;

/// What a client is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClientState {
    Alive,
    Dead,
    Spawning,
    Lagged,
    Editing,
    Unknown(i32),
}

impl ClientState {
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Alive,
            1 => Self::Dead,
            2 => Self::Spawning,
            3 => Self::Lagged,
            4 => Self::Editing,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "alive"),
            Self::Dead => write!(f, "dead"),
            Self::Spawning => write!(f, "spawning"),
            Self::Lagged => write!(f, "lagged"),
            Self::Editing => write!(f, "editing"),
            Self::Unknown(raw) => write!(f, "state {raw}"),
        }
    }
}

/// One client's statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerRecord {
    pub client_id: i32,
    pub ping: i32,
    /// Empty for malformed records.
    pub name: String,
    pub team: String,
    pub frags: i32,
    pub flags: i32,
    pub deaths: i32,
    pub teamkills: i32,
    /// Hit percentage.
    pub accuracy: i32,
    pub health: i32,
    pub armour: i32,
    pub weapon: i32,
    pub role: i32,
    pub state: ClientState,
    /// Only the first three octets are sent; the last is always zero.
    pub ip: Ipv4Addr,
    pub damage: i32,
    /// Potential damage of every shot fired, hits or not.
    pub shot_damage: i32,
}

impl PlayerRecord {
    /// Returns `true` if the record can be shown to users.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Decodes one player-stats record datagram.
pub fn decode_player_record(buf: &[u8]) -> ProtocolResult<PlayerRecord> {
    decode_player_record_with_diagnostics(buf, &mut Diagnostics::new())
}

/// Decodes one player-stats record datagram, recording tolerated variance.
pub fn decode_player_record_with_diagnostics(
    buf: &[u8],
    diagnostics: &mut Diagnostics,
) -> ProtocolResult<PlayerRecord> {
    if buf.len() < MIN_RECORD_LEN {
        return Err(DecodeError::IncompleteRecord {
            actual: buf.len(),
            required: MIN_RECORD_LEN,
        });
    }

    let mut cursor = ByteCursor::new(buf);
    skip_response_header(&mut cursor)?;
    let subtype = take_subtype(&mut cursor)?;
    if subtype.1 != SUBTYPE_PLAYER_STATS {
        diagnostics.record(
            DiagnosticKind::SubtypeMismatch,
            format!(
                "player record subtype {subtype:?}, expected second byte {SUBTYPE_PLAYER_STATS}"
            ),
        );
    }

    let client_id = cursor.take_int().field("client id")?;
    let ping = cursor.take_int().field("ping")?;
    let name = cursor.take_string().into_owned();
    let team = cursor.take_string().into_owned();
    let frags = cursor.take_int().field("frags")?;
    let flags = cursor.take_int().field("flags")?;
    let deaths = cursor.take_int().field("deaths")?;
    let teamkills = cursor.take_int().field("teamkills")?;
    let accuracy = cursor.take_int().field("accuracy")?;
    let health = cursor.take_int().field("health")?;
    let armour = cursor.take_int().field("armour")?;
    let weapon = cursor.take_int().field("weapon")?;
    let role = cursor.take_int().field("role")?;
    let state = ClientState::from_raw(cursor.take_int().field("state")?);
    let [a, b, c] = cursor.take_array::<3>().field("ip octets")?;
    let damage = cursor.take_int().field("damage")?;
    let shot_damage = cursor.take_int().field("shot damage")?;

    Ok(PlayerRecord {
        client_id,
        ping,
        name,
        team,
        frags,
        flags,
        deaths,
        teamkills,
        accuracy,
        health,
        armour,
        weapon,
        role,
        state,
        ip: Ipv4Addr::new(a, b, c, 0),
        damage,
        shot_damage,
    })
}
