use log::trace;

use crate::{BIT_CLEAR, BIT_SET, GROUP_SIZE};

/// Expands source bytes into the UTF-256 byte-per-bit representation.
///
/// Every source byte becomes one expansion group of [`GROUP_SIZE`] sentinel
/// bytes, most significant bit first: [`BIT_SET`] for a set bit,
/// [`BIT_CLEAR`] for a clear bit. The output length is exactly
/// `GROUP_SIZE * source.len()`, allocated up front.
///
/// The source is treated as opaque bytes and does not have to be valid
/// UTF-8. Expansion cannot fail; an empty source yields an empty stream.
///
/// # Example
///
/// ```rust
/// use utf256_codec::encode;
///
/// // 'A' is 0x41 = 0b01000001
/// let expanded = encode(b"A");
/// assert_eq!(expanded, [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF]);
/// ```
pub fn encode(source: &[u8]) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(source.len() * GROUP_SIZE);

    for &byte in source {
        for shift in (0..GROUP_SIZE).rev() {
            expanded.push(if (byte >> shift) & 1 == 1 {
                BIT_SET
            } else {
                BIT_CLEAR
            });
        }
    }

    trace!(
        "expanded {} source bytes into {} sentinel bytes",
        source.len(),
        expanded.len()
    );

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_vector() {
        assert_eq!(
            encode(b"A"),
            [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF]
        );
    }

    #[test]
    fn empty_source() {
        assert!(encode(b"").is_empty());
    }

    #[test]
    fn output_is_eight_times_input() {
        assert_eq!(encode(b"AB").len(), 16);

        for len in [0usize, 1, 3, 17, 256] {
            let source = vec![0x5A; len];
            assert_eq!(encode(&source).len(), len * GROUP_SIZE);
        }
    }

    #[test]
    fn accepts_arbitrary_binary_source() {
        // 0xFF 0xFE is not valid UTF-8; the codec does not care
        let expanded = encode(&[0xFF, 0xFE]);

        assert_eq!(expanded[..8], [BIT_SET; 8]);
        assert_eq!(expanded[8..15], [BIT_SET; 7]);
        assert_eq!(expanded[15], BIT_CLEAR);
    }

    #[test]
    fn groups_are_msb_first() {
        // 0x80 sets only bit 7, so only the first sentinel of the group
        let expanded = encode(&[0x80]);

        assert_eq!(expanded[0], BIT_SET);
        assert_eq!(expanded[1..], [BIT_CLEAR; 7]);
    }
}
