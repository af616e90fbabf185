//! Human-readable output.

use std::fmt::Write;

use protocol::Diagnostics;
use query::{RecordOutcome, RosterResult};

use crate::InfoReport;

/// Formats a server info report.
pub fn format_info_pretty(report: &InfoReport) -> String {
    let snapshot = &report.snapshot;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "map: {} ({} min left)",
        snapshot.map_name, snapshot.minutes_remaining
    );
    let _ = writeln!(out, "description: {}", snapshot.description);
    let _ = writeln!(
        out,
        "game mode: {} server mode: {}",
        snapshot.game_mode, snapshot.mode
    );
    let _ = writeln!(
        out,
        "clients: {}/{}",
        snapshot.connected_clients, snapshot.max_clients
    );
    if !snapshot.players.is_empty() {
        let _ = writeln!(out, "players:");
        for name in &snapshot.players {
            let _ = writeln!(out, "  {name}");
        }
    }
    write_diagnostics(&mut out, &report.diagnostics);
    out
}

/// Formats a player-stats roster as a table.
pub fn format_roster_pretty(roster: &RosterResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3} {:<16} {:<5} {:>5} {:>6} {:>5} {:>4} {:>4} {:<9} {:<15}",
        "cn", "name", "team", "frags", "deaths", "flags", "acc", "ping", "state", "ip"
    );
    for record in &roster.records {
        let _ = writeln!(
            out,
            "{:>3} {:<16} {:<5} {:>5} {:>6} {:>5} {:>3}% {:>4} {:<9} {:<15}",
            record.client_id,
            record.name,
            record.team,
            record.frags,
            record.deaths,
            record.flags,
            record.accuracy,
            record.ping,
            record.state.to_string(),
            record.ip.to_string()
        );
    }
    for (index, outcome) in roster.outcomes.iter().enumerate() {
        if let RecordOutcome::Discarded(kind) = outcome {
            let _ = writeln!(out, "record {}: discarded ({kind:?})", index + 1);
        }
    }
    let _ = writeln!(
        out,
        "{} of {} listed clients decoded, {} discarded",
        roster.records.len(),
        roster.expected_ids.len(),
        roster.discarded
    );
    write_diagnostics(&mut out, &roster.diagnostics);
    out
}

fn write_diagnostics(out: &mut String, diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        return;
    }
    let _ = writeln!(out, "diagnostics:");
    for event in diagnostics.events() {
        let _ = writeln!(out, "  {:?}: {}", event.kind, event.detail);
    }
}
