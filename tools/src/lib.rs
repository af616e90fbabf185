//! Query and inspection tools for AssaultCube servers.
//!
//! This crate provides the pieces behind the `cubequery` binary:
//!
//! - Live queries over UDP ([`UdpTransport`])
//! - Offline decoding of captured datagrams
//! - Human-readable and JSON output
//!
//! # Design Principles
//!
//! - **Thin shell** - All protocol knowledge lives in `protocol` and `query`.
//! - **One attempt** - A lost datagram fails the query; rerun to retry.

mod capture;
mod render;
mod transport;

use anyhow::{Context, Result};
use protocol::{
    decode_server_info_with_diagnostics, ClientSelector, Diagnostics, Limits, Request,
    ServerSnapshot,
};
use query::{decode_player_stats, DatagramSource, RosterResult};
use serde::Serialize;

pub use capture::{collect_capture_files, decode_info_capture, decode_players_capture};
pub use render::{format_info_pretty, format_roster_pretty};
pub use transport::{QueryConfig, UdpTransport};

/// Server info together with what the decoder had to tolerate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoReport {
    pub snapshot: ServerSnapshot,
    pub diagnostics: Diagnostics,
}

/// Decodes a name-list datagram into a report.
pub fn info_report(datagram: &[u8], limits: &Limits) -> Result<InfoReport> {
    let mut diagnostics = Diagnostics::new();
    let snapshot = decode_server_info_with_diagnostics(datagram, limits, &mut diagnostics)
        .context("decode server info")?;
    Ok(InfoReport {
        snapshot,
        diagnostics,
    })
}

/// Runs a live name-list query.
pub fn query_server_info(config: &QueryConfig, limits: &Limits) -> Result<InfoReport> {
    let mut transport = UdpTransport::connect(config)
        .with_context(|| format!("connect to {}:{}", config.host, config.port))?;
    transport.send(Request::NameList).context("send name list request")?;
    let datagram = transport
        .recv_datagram()
        .context("receive server info")?;
    info_report(&datagram, limits)
}

/// Runs a live player-stats query.
pub fn query_player_stats(
    config: &QueryConfig,
    selector: ClientSelector,
    limits: &Limits,
) -> Result<RosterResult> {
    let mut transport = UdpTransport::connect(config)
        .with_context(|| format!("connect to {}:{}", config.host, config.port))?;
    transport
        .send(Request::PlayerStats(selector))
        .context("send player stats request")?;
    let header = transport
        .recv_datagram()
        .context("receive player stats header")?;
    let roster =
        decode_player_stats(&header, &mut transport, limits).context("reassemble player stats")?;
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_report_carries_diagnostics() {
        let datagram = [
            0x01, 0x01, 0xFF, 0x68, 0x00, 5, 0, 10, b'm', 0, 0, 8, 9, 9,
        ];
        let report = info_report(&datagram, &Limits::default()).unwrap();
        assert_eq!(report.snapshot.map_name, "m");
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn info_report_error_has_context() {
        let err = info_report(&[0x01], &Limits::default()).unwrap_err();
        assert!(format!("{err:#}").contains("decode server info"));
    }
}
