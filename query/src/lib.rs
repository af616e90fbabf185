//! Multi-datagram player statistics reassembly.
//!
//! This crate ties the per-datagram decoders in `protocol` to a transport
//! that delivers datagrams one at a time. The transport is abstracted behind
//! [`DatagramSource`]; this crate never opens a socket or waits on a timer.
//!
//! # Features
//!
//! - Header + per-client record reassembly by arrival order
//! - Graceful discarding of short, cut or nameless records
//! - Client-id cross-check reported as a diagnostic
//! - Offline [`Replay`] of captured datagrams
//!
//! # Design Principles
//!
//! - **Sequential** - One outstanding receive at a time; arrival order is the
//!   only correlation the protocol offers.
//! - **No retries** - Transport failures abort the query and are returned as is.
//! - **No partial success** - A roster is only handed out once every expected
//!   datagram has arrived.

mod error;
mod reassembler;
mod source;

pub use error::{ReassemblyError, ReassemblyResult, StatsError};
pub use reassembler::{
    decode_player_stats, Phase, PlayerStatsReassembler, RecordOutcome, RosterResult,
};
pub use source::{DatagramSource, Replay, ReplayExhausted};
