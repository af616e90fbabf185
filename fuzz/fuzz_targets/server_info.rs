#![no_main]

use libfuzzer_sys::fuzz_target;
use protocol::{decode_server_info_with_diagnostics, Diagnostics, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits::for_testing();
    let mut diagnostics = Diagnostics::new();
    if let Ok(snapshot) = decode_server_info_with_diagnostics(data, &limits, &mut diagnostics) {
        assert!(snapshot.players.len() <= limits.max_players);
    }
});
