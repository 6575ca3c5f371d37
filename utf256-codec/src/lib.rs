#![doc = include_str!("../README.md")]
//!
//! ## Stream Layout
//!
//! ```text
//! source    0x41 ('A', 0b01000001)
//! expanded  00 FF 00 00 00 00 00 FF
//! ```
//!
//! The two sentinels are the only legal expanded-stream values; any other
//! byte, or a length that is not a whole number of groups, makes the stream
//! malformed. Over well-formed streams the codec is an exact bijection:
//! `decode(encode(x)) == x` and `encode(decode(y)) == y`.
//!
//! The source side is opaque bytes. The codec neither requires nor checks
//! UTF-8; callers that promise text validate it themselves.
//!
//! Both operations are stateless single-pass transforms over in-memory
//! buffers. They share nothing, so separate calls may run on separate
//! threads freely.

mod decode;
mod encode;
mod errors;

pub use decode::{decode, is_well_formed};
pub use encode::encode;
pub use errors::DecodeError;

/// Expanded bytes per source byte: one sentinel byte per source bit.
pub const GROUP_SIZE: usize = 8;

/// Sentinel byte carrying a set bit.
pub const BIT_SET: u8 = 0xFF;

/// Sentinel byte carrying a clear bit.
pub const BIT_CLEAR: u8 = 0x00;

#[test]
fn round_trip_pattern_buffers() {
    for len in [1usize, 2, 64, 1021] {
        // Deterministic non-text byte pattern
        let mut source = vec![0u8; len];
        for (i, byte) in source.iter_mut().enumerate() {
            *byte = ((i * 37 + 123) % 256) as u8;
        }

        let expanded = encode(&source);
        assert_eq!(expanded.len(), len * GROUP_SIZE);
        assert!(is_well_formed(&expanded));
        assert_eq!(decode(&expanded).unwrap(), source);
    }
}
