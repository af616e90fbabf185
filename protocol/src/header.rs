//! Response header layout and request encoding.

use cursor::{ByteCursor, ByteWriter, GameInt};

use crate::error::{FieldContext, ProtocolResult};

/// Length of the echoed request code at the start of every response.
pub const RESPONSE_ECHO_LEN: usize = 2;

/// Length of the protocol-version block after the echo.
pub const VERSION_HEADER_LEN: usize = 3;

/// Length of the response-subtype pair in player-stats responses.
pub const SUBTYPE_LEN: usize = 2;

/// Subtype marker of the player-stats header datagram (client id list).
pub const SUBTYPE_CLIENT_IDS: i8 = -10;

/// Subtype marker of a player-stats record datagram.
pub const SUBTYPE_PLAYER_STATS: i8 = -11;

/// Default game port; the query port is one above it.
pub const DEFAULT_GAME_PORT: u16 = 28763;

/// Request code for the server info and name list query.
pub const NAMELIST_REQUEST: [u8; 2] = [0x01, 0x01];

/// Request code for the player statistics query.
pub const PLAYERSTATS_REQUEST: [u8; 2] = [0x00, 0x01];

/// Client selector value asking for every connected client.
pub const ALL_CLIENTS: i8 = -1;

/// Returns the query port that belongs to a game port.
#[must_use]
pub const fn query_port(game_port: u16) -> u16 {
    game_port.wrapping_add(1)
}

/// Which clients a player-stats query asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientSelector {
    #[default]
    All,
    One(u8),
}

impl ClientSelector {
    /// The selector as the game int the server reads.
    ///
    /// Client numbers from 128 up need the escaped form so they do not
    /// collide with negative values such as [`ALL_CLIENTS`].
    #[must_use]
    pub fn game_int(self) -> GameInt {
        match self {
            Self::All => GameInt::Small(ALL_CLIENTS),
            Self::One(cn) => {
                i8::try_from(cn).map_or(GameInt::Escaped(u16::from(cn)), GameInt::Small)
            }
        }
    }
}

/// A query the client can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Server info followed by the connected player names. One datagram back.
    NameList,
    /// Client id list followed by one datagram per client.
    PlayerStats(ClientSelector),
}

impl Request {
    /// Encodes the request datagram.
    #[must_use]
    pub fn encode(self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(5);
        match self {
            Self::NameList => {
                writer.write_bytes(&NAMELIST_REQUEST);
            }
            Self::PlayerStats(selector) => {
                writer
                    .write_bytes(&PLAYERSTATS_REQUEST)
                    .write_encoded(selector.game_int());
            }
        }
        writer.finish()
    }
}

/// Skips the echo and version blocks shared by every response.
pub(crate) fn skip_response_header(cursor: &mut ByteCursor<'_>) -> ProtocolResult<()> {
    cursor.skip(RESPONSE_ECHO_LEN).field("response echo")?;
    cursor.skip(VERSION_HEADER_LEN).field("protocol version")?;
    Ok(())
}

/// Reads the two-byte response-subtype pair.
pub(crate) fn take_subtype(cursor: &mut ByteCursor<'_>) -> ProtocolResult<(i8, i8)> {
    let [first, second] = cursor.take_array::<SUBTYPE_LEN>().field("response subtype")?;
    Ok((
        i8::from_le_bytes([first]),
        i8::from_le_bytes([second]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn namelist_request_bytes() {
        assert_eq!(Request::NameList.encode(), vec![0x01, 0x01]);
    }

    #[test]
    fn playerstats_request_bytes() {
        assert_eq!(
            Request::PlayerStats(ClientSelector::All).encode(),
            vec![0x00, 0x01, 0xFF]
        );
        assert_eq!(
            Request::PlayerStats(ClientSelector::One(2)).encode(),
            vec![0x00, 0x01, 0x02]
        );
    }

    #[test]
    fn high_client_numbers_are_escaped() {
        let one_200 = Request::PlayerStats(ClientSelector::One(200)).encode();
        assert_eq!(one_200, vec![0x00, 0x01, 0x80, 200, 0x00]);
        let mut cursor = ByteCursor::new(&one_200[2..]);
        assert_eq!(cursor.take_int().unwrap(), 200);

        let one_255 = Request::PlayerStats(ClientSelector::One(255)).encode();
        let all = Request::PlayerStats(ClientSelector::All).encode();
        assert_ne!(one_255, all);
        let mut cursor = ByteCursor::new(&one_255[2..]);
        assert_eq!(cursor.take_int().unwrap(), 255);
        assert!(cursor.is_empty());
    }

    #[test]
    fn selector_boundary_between_branches() {
        assert_eq!(ClientSelector::One(127).game_int(), GameInt::Small(127));
        assert_eq!(ClientSelector::One(128).game_int(), GameInt::Escaped(128));
        assert_eq!(ClientSelector::All.game_int().value(), -1);
    }

    #[test]
    fn query_port_is_game_port_plus_one() {
        assert_eq!(query_port(DEFAULT_GAME_PORT), 28764);
    }

    #[test]
    fn header_skip_needs_five_bytes() {
        let mut cursor = ByteCursor::new(&[1, 1, 0, 104, 0]);
        skip_response_header(&mut cursor).unwrap();
        assert!(cursor.is_empty());

        let mut short = ByteCursor::new(&[1, 1, 0]);
        let err = skip_response_header(&mut short).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Truncated {
                field: "protocol version",
                ..
            }
        ));
    }

    #[test]
    fn subtype_is_signed() {
        let mut cursor = ByteCursor::new(&[0x00, 0xF6]);
        assert_eq!(take_subtype(&mut cursor).unwrap(), (0, SUBTYPE_CLIENT_IDS));
    }
}
