#![no_main]

use cursor::ByteCursor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 5;
        idx += 1;

        match op {
            0 => {
                let _ = cursor.take_fixed_int();
            }
            1 => {
                let _ = cursor.take_game_int();
            }
            2 => {
                let _ = cursor.take_string();
            }
            3 => {
                let n = usize::from(data[idx.saturating_sub(1)] % 8);
                let _ = cursor.skip(n);
            }
            _ => {
                let before = cursor.remaining();
                if cursor.take_int().is_err() {
                    assert_eq!(cursor.remaining(), before);
                }
            }
        }
    }
});
