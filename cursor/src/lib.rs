//! Byte cursor and primitive decoders for the AssaultCube extinfo protocol.
//!
//! This crate provides [`ByteCursor`] for reading protocol primitives out of a
//! received datagram and [`ByteWriter`] for building datagrams.
//! It is designed for bounded, panic-free operation with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about servers, players, or modes.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use cursor::{ByteCursor, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_game_int(300).unwrap();
//! writer.write_string("ac_desert");
//!
//! let bytes = writer.finish();
//!
//! let mut cursor = ByteCursor::new(&bytes);
//! assert_eq!(cursor.take_int().unwrap(), 300);
//! assert_eq!(cursor.take_string(), "ac_desert");
//! ```

mod error;
mod game_int;
mod reader;
mod writer;

pub use error::{CursorError, CursorResult, ValueOutOfRange};
pub use game_int::{GameInt, ESCAPE_SENTINEL, SMALL_MAX, SMALL_MIN};
pub use reader::ByteCursor;
pub use writer::ByteWriter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roundtrip() {
        let writer = ByteWriter::new();
        let bytes = writer.finish();
        assert!(bytes.is_empty());

        let cursor = ByteCursor::new(&bytes);
        assert!(cursor.is_empty());
    }

    #[test]
    fn game_int_roundtrip_representative_values() {
        let test_cases = [0, 1, 127, -127, 128, 255, 32_767];

        for value in test_cases {
            let mut writer = ByteWriter::new();
            writer.write_game_int(value).unwrap();
            let bytes = writer.finish();

            let mut cursor = ByteCursor::new(&bytes);
            let decoded = cursor.take_game_int().unwrap();
            assert_eq!(decoded.value(), value, "roundtrip failed for {value}");
            assert_eq!(
                decoded.is_escaped(),
                value.abs() >= 128,
                "wrong branch for {value}"
            );
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn mixed_roundtrip() {
        let mut writer = ByteWriter::new();
        writer.write_fixed_int(-128).write_fixed_int(1);
        writer.write_game_int(50).unwrap();
        writer.write_string("Alice").write_string("CLA");
        writer.write_bytes(&[10, 0, 0]);
        writer.write_game_int(300).unwrap();
        let bytes = writer.finish();

        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.take_fixed_int().unwrap(), -128);
        assert_eq!(cursor.take_fixed_int().unwrap(), 1);
        assert_eq!(cursor.take_int().unwrap(), 50);
        assert_eq!(cursor.take_string(), "Alice");
        assert_eq!(cursor.take_string(), "CLA");
        assert_eq!(cursor.take_array::<3>().unwrap(), [10, 0, 0]);
        assert_eq!(cursor.take_int().unwrap(), 300);
        assert!(cursor.is_empty());
    }
}
