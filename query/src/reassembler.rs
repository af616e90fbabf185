//! Player-stats reassembly state machine.
//!
//! A player-stats query answers with one header datagram listing client ids,
//! then one record datagram per listed client. Nothing on the wire ties a
//! record to its slot except arrival order, so records are accepted in the
//! order they come. The decoded client id is only cross-checked against the
//! header, and a mismatch is reported without rejecting the record.

use protocol::{
    decode_player_record_with_diagnostics, decode_stats_header, DecodeError, DiagnosticKind,
    Diagnostics, Limits, PlayerRecord,
};

use crate::error::{ReassemblyError, ReassemblyResult, StatsError};
use crate::source::DatagramSource;

/// Where a reassembly currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the client-id list.
    AwaitHeader,
    /// Waiting for more record datagrams.
    CollectRecords,
    /// The roster has been handed out.
    Finalized,
}

/// What happened to one record datagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RecordOutcome {
    Accepted { client_id: i32 },
    Discarded(DiagnosticKind),
}

/// The reconstructed roster of one player-stats query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RosterResult {
    /// Client ids in header order.
    pub expected_ids: Vec<i32>,
    /// Usable records in arrival order.
    pub records: Vec<PlayerRecord>,
    /// Record datagrams that could not be used.
    pub discarded: usize,
    /// One entry per record datagram, in arrival order.
    pub outcomes: Vec<RecordOutcome>,
    pub diagnostics: Diagnostics,
}

/// Drives one player-stats exchange from header to roster.
#[derive(Debug)]
pub struct PlayerStatsReassembler {
    limits: Limits,
    phase: Phase,
    expected_ids: Vec<i32>,
    received: usize,
    records: Vec<PlayerRecord>,
    discarded: usize,
    outcomes: Vec<RecordOutcome>,
    diagnostics: Diagnostics,
}

impl PlayerStatsReassembler {
    #[must_use]
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            phase: Phase::AwaitHeader,
            expected_ids: Vec::new(),
            received: 0,
            records: Vec::new(),
            discarded: 0,
            outcomes: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Client ids announced by the header, empty before it arrived.
    #[must_use]
    pub fn expected_ids(&self) -> &[i32] {
        &self.expected_ids
    }

    /// Number of record datagrams still expected.
    #[must_use]
    pub fn pending(&self) -> usize {
        match self.phase {
            Phase::CollectRecords => self.expected_ids.len() - self.received,
            Phase::AwaitHeader | Phase::Finalized => 0,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consumes the header datagram and returns the expected client ids.
    pub fn accept_header(&mut self, buf: &[u8]) -> ReassemblyResult<&[i32]> {
        self.expect_phase(Phase::AwaitHeader, "accept header")?;
        let header = decode_stats_header(buf, &self.limits, &mut self.diagnostics)
            .map_err(ReassemblyError::Header)?;
        log::debug!(
            target: "cubequery",
            "player stats header lists {} clients: {:?}",
            header.client_ids.len(),
            header.client_ids
        );
        self.expected_ids = header.client_ids;
        self.phase = Phase::CollectRecords;
        Ok(&self.expected_ids)
    }

    /// Consumes the next record datagram in arrival order.
    ///
    /// Unusable records are counted and reported, never returned as errors.
    pub fn accept_record(&mut self, buf: &[u8]) -> ReassemblyResult<RecordOutcome> {
        self.expect_phase(Phase::CollectRecords, "accept record")?;
        if self.pending() == 0 {
            return Err(ReassemblyError::OutOfPhase {
                phase: self.phase,
                operation: "accept record beyond header count",
            });
        }
        let slot = self.expected_ids[self.received];
        self.received += 1;

        let outcome = match decode_player_record_with_diagnostics(buf, &mut self.diagnostics) {
            Ok(record) if !record.is_usable() => {
                self.discard(
                    DiagnosticKind::EmptyName,
                    format!("record for slot cn {slot} has an empty name"),
                )
            }
            Ok(record) => {
                let client_id = record.client_id;
                if !self.expected_ids.contains(&client_id) {
                    self.diagnostics.record(
                        DiagnosticKind::UnexpectedClientId,
                        format!("record cn {client_id} arrived in slot cn {slot} but is not listed"),
                    );
                }
                self.records.push(record);
                RecordOutcome::Accepted { client_id }
            }
            Err(err @ DecodeError::IncompleteRecord { .. }) => {
                self.discard(DiagnosticKind::IncompleteRecord, format!("slot cn {slot}: {err}"))
            }
            Err(err) => {
                self.discard(DiagnosticKind::TruncatedRecord, format!("slot cn {slot}: {err}"))
            }
        };
        log::debug!(
            target: "cubequery",
            "record {}/{}: {outcome:?}",
            self.received,
            self.expected_ids.len()
        );
        self.outcomes.push(outcome);
        Ok(outcome)
    }

    /// Hands out the roster once every expected record has arrived.
    pub fn finish(&mut self) -> ReassemblyResult<RosterResult> {
        self.expect_phase(Phase::CollectRecords, "finish")?;
        if self.pending() > 0 {
            return Err(ReassemblyError::Incomplete {
                expected: self.expected_ids.len(),
                received: self.received,
            });
        }
        self.phase = Phase::Finalized;
        Ok(RosterResult {
            expected_ids: std::mem::take(&mut self.expected_ids),
            records: std::mem::take(&mut self.records),
            discarded: self.discarded,
            outcomes: std::mem::take(&mut self.outcomes),
            diagnostics: std::mem::take(&mut self.diagnostics),
        })
    }

    fn discard(&mut self, kind: DiagnosticKind, detail: String) -> RecordOutcome {
        self.discarded += 1;
        self.diagnostics.record(kind, detail);
        RecordOutcome::Discarded(kind)
    }

    fn expect_phase(&self, phase: Phase, operation: &'static str) -> ReassemblyResult<()> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(ReassemblyError::OutOfPhase {
                phase: self.phase,
                operation,
            })
        }
    }
}

/// Decodes a complete player-stats response.
///
/// `header` is the first datagram; one further datagram per listed client is
/// pulled from `source`, one at a time. A transport failure aborts the whole
/// query and no partial roster is returned.
pub fn decode_player_stats<S>(
    header: &[u8],
    source: &mut S,
    limits: &Limits,
) -> Result<RosterResult, StatsError<S::Error>>
where
    S: DatagramSource + ?Sized,
{
    let mut reassembler = PlayerStatsReassembler::new(limits.clone());
    reassembler.accept_header(header)?;
    while reassembler.pending() > 0 {
        let datagram = source.recv_datagram().map_err(StatsError::Transport)?;
        reassembler.accept_record(&datagram)?;
    }
    Ok(reassembler.finish()?)
}
