use cursor::ByteWriter;
use protocol::{DiagnosticKind, Limits, SUBTYPE_CLIENT_IDS, SUBTYPE_PLAYER_STATS};
use query::{
    decode_player_stats, DatagramSource, ReassemblyError, Replay, ReplayExhausted, StatsError,
};

fn header_datagram(ids: &[i32]) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer
        .write_bytes(&[0x00, 0x01, 0xFF, 0xFF, 0x68])
        .write_fixed_int(0)
        .write_fixed_int(SUBTYPE_CLIENT_IDS);
    for id in ids {
        writer.write_game_int(*id).unwrap();
    }
    writer.finish()
}

fn record_datagram(cn: i32, name: &str, frags: i32) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer
        .write_bytes(&[0x00, 0x01, 0xFF, 0xFF, 0x68])
        .write_fixed_int(0)
        .write_fixed_int(SUBTYPE_PLAYER_STATS);
    writer.write_game_int(cn).unwrap();
    writer.write_game_int(50).unwrap();
    writer.write_string(name).write_string("CLA");
    for value in [frags, 0, 1, 0, 25, 100, 0, 5, 0, 0] {
        writer.write_game_int(value).unwrap();
    }
    writer.write_bytes(&[10, 0, 0]);
    writer.write_game_int(120).unwrap();
    writer.write_game_int(300).unwrap();
    writer.finish()
}

/// A transport that times out after a fixed number of datagrams.
struct FlakyTransport {
    datagrams: Vec<Vec<u8>>,
    calls: usize,
}

impl DatagramSource for FlakyTransport {
    type Error = std::io::Error;

    fn recv_datagram(&mut self) -> Result<Vec<u8>, Self::Error> {
        self.calls += 1;
        if self.datagrams.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "recv timed out",
            ));
        }
        Ok(self.datagrams.remove(0))
    }
}

#[test]
fn two_clients_in_arrival_order() {
    let header = header_datagram(&[2, 5]);
    let mut replay = Replay::new([record_datagram(2, "Alice", 3), record_datagram(5, "Bob", 9)]);

    let roster = decode_player_stats(&header, &mut replay, &Limits::default()).unwrap();
    assert_eq!(roster.expected_ids, [2, 5]);
    assert_eq!(roster.records.len(), 2);
    assert_eq!(roster.records[0].name, "Alice");
    assert_eq!(roster.records[1].name, "Bob");
    assert_eq!(roster.records[1].frags, 9);
    assert_eq!(roster.discarded, 0);
    assert!(roster.diagnostics.is_empty());
}

#[test]
fn missing_datagram_propagates_transport_error() {
    let header = header_datagram(&[2, 5]);
    let mut transport = FlakyTransport {
        datagrams: vec![record_datagram(2, "Alice", 3)],
        calls: 0,
    };

    let err = decode_player_stats(&header, &mut transport, &Limits::default()).unwrap_err();
    match err {
        StatsError::Transport(io) => assert_eq!(io.kind(), std::io::ErrorKind::TimedOut),
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(transport.calls, 2);
}

#[test]
fn replay_running_dry_is_a_transport_error() {
    let header = header_datagram(&[1, 2, 3]);
    let mut replay = Replay::new([record_datagram(1, "a", 0)]);
    let err = decode_player_stats(&header, &mut replay, &Limits::default()).unwrap_err();
    assert_eq!(err, StatsError::Transport(ReplayExhausted { delivered: 1 }));
}

#[test]
fn empty_server_needs_no_records() {
    let header = header_datagram(&[]);
    let mut transport = FlakyTransport {
        datagrams: Vec::new(),
        calls: 0,
    };
    let roster = decode_player_stats(&header, &mut transport, &Limits::default()).unwrap();
    assert!(roster.expected_ids.is_empty());
    assert!(roster.records.is_empty());
    assert_eq!(transport.calls, 0, "no receive may happen for an empty roster");
}

#[test]
fn unusable_records_are_dropped_not_fatal() {
    let header = header_datagram(&[0, 1, 2, 3]);
    let mut cut = record_datagram(2, "Carol", 1);
    cut.truncate(cut.len() - 4);
    let mut replay = Replay::new([
        record_datagram(0, "Alice", 2),
        vec![0x00, 0x01, 0xFF, 0xFF, 0x68, 0x00, 0xF5, 1],
        cut,
        record_datagram(3, "", 0),
    ]);

    let roster = decode_player_stats(&header, &mut replay, &Limits::default()).unwrap();
    assert_eq!(roster.records.len(), 1);
    assert_eq!(roster.records[0].name, "Alice");
    assert_eq!(roster.discarded, 3);
    assert_eq!(roster.diagnostics.count(DiagnosticKind::IncompleteRecord), 1);
    assert_eq!(roster.diagnostics.count(DiagnosticKind::TruncatedRecord), 1);
    assert_eq!(roster.diagnostics.count(DiagnosticKind::EmptyName), 1);
    assert_eq!(replay.remaining(), 0);
}

#[test]
fn header_subtype_mismatch_is_reported() {
    let mut header = header_datagram(&[7]);
    header[6] = 0xF0;
    let mut replay = Replay::new([record_datagram(7, "Dave", 0)]);
    let roster = decode_player_stats(&header, &mut replay, &Limits::default()).unwrap();
    assert_eq!(roster.records.len(), 1);
    assert_eq!(roster.diagnostics.count(DiagnosticKind::SubtypeMismatch), 1);
}

#[test]
fn truncated_header_aborts_before_receiving() {
    let mut transport = FlakyTransport {
        datagrams: vec![record_datagram(1, "a", 0)],
        calls: 0,
    };
    let err = decode_player_stats(&[0x00, 0x01, 0xFF], &mut transport, &Limits::default())
        .unwrap_err();
    assert!(matches!(
        err,
        StatsError::Reassembly(ReassemblyError::Header(_))
    ));
    assert_eq!(transport.calls, 0);
}

#[test]
fn swapped_arrival_order_is_accepted_as_is() {
    let header = header_datagram(&[2, 5]);
    let mut replay = Replay::new([record_datagram(5, "Bob", 0), record_datagram(2, "Alice", 0)]);
    let roster = decode_player_stats(&header, &mut replay, &Limits::default()).unwrap();
    let ids: Vec<i32> = roster.records.iter().map(|r| r.client_id).collect();
    assert_eq!(ids, [5, 2]);
    assert_eq!(
        roster.diagnostics.count(DiagnosticKind::UnexpectedClientId),
        0
    );
}

#[test]
fn same_datagrams_same_roster() {
    let header = header_datagram(&[2, 5]);
    let records = [record_datagram(2, "Alice", 3), record_datagram(5, "Bob", 9)];
    let first =
        decode_player_stats(&header, &mut Replay::new(records.clone()), &Limits::default())
            .unwrap();
    let second =
        decode_player_stats(&header, &mut Replay::new(records), &Limits::default()).unwrap();
    assert_eq!(first, second);
}
