#![no_main]

use libfuzzer_sys::fuzz_target;
use protocol::Limits;
use query::{decode_player_stats, Replay};

fuzz_target!(|data: &[u8]| {
    // First byte picks the header length; the rest is split into records.
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let header_len = usize::from(split).min(rest.len());
    let (header, mut tail) = rest.split_at(header_len);

    let mut records = Vec::new();
    while let Some((&len, body)) = tail.split_first() {
        let len = usize::from(len % 64).min(body.len());
        records.push(body[..len].to_vec());
        tail = &body[len..];
    }

    let mut replay = Replay::new(records);
    if let Ok(roster) = decode_player_stats(header, &mut replay, &Limits::for_testing()) {
        assert_eq!(
            roster.records.len() + roster.discarded,
            roster.expected_ids.len()
        );
    }
});
