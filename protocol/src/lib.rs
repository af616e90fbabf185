//! Response decoders for the AssaultCube extinfo query protocol.
//!
//! This crate turns the raw bytes of one received datagram into structured
//! server and player state. It never touches a socket: the caller hands in
//! exactly one datagram at a time.
//!
//! # Design Principles
//!
//! - **Pure decoding** - Every decoder is a function of its input bytes.
//! - **Bounded decoding** - List lengths are validated against [`Limits`].
//! - **Tolerant of real servers** - Known variance is recorded as a
//!   [`Diagnostic`], not returned as an error.
//!
//! # Example
//!
//! ```
//! use protocol::{decode_server_info, Limits, ServerMode};
//!
//! let datagram = [
//!     0x01, 0x01, 0xFF, 0x68, 0x00, // echo + version
//!     5, 1, 12, // game mode, clients, minutes
//!     b'a', b'c', b'_', b'd', b'e', b's', b'e', b'r', b't', 0,
//!     0, // empty description
//!     16, 0, 1, // max clients, mode pair
//!     b'Z', b'e', b'd', 0, 0,
//! ];
//! let snapshot = decode_server_info(&datagram, &Limits::default()).unwrap();
//! assert_eq!(snapshot.map_name, "ac_desert");
//! assert_eq!(snapshot.mode, ServerMode::Open);
//! assert_eq!(snapshot.players, ["Zed"]);
//! ```

mod diagnostics;
mod error;
mod header;
mod info;
mod limits;
mod mode;
mod record;
mod stats;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{DecodeError, LimitKind, ProtocolResult};
pub use header::{
    query_port, ClientSelector, Request, ALL_CLIENTS, DEFAULT_GAME_PORT, NAMELIST_REQUEST,
    PLAYERSTATS_REQUEST, RESPONSE_ECHO_LEN, SUBTYPE_CLIENT_IDS, SUBTYPE_LEN,
    SUBTYPE_PLAYER_STATS, VERSION_HEADER_LEN,
};
pub use info::{decode_server_info, decode_server_info_with_diagnostics, ServerSnapshot};
pub use limits::Limits;
pub use mode::{resolve_mode, ModePair, ServerMode};
pub use record::{
    decode_player_record, decode_player_record_with_diagnostics, ClientState, PlayerRecord,
    MIN_RECORD_LEN,
};
pub use stats::{decode_stats_header, StatsHeader};
