use log::trace;

use crate::errors::DecodeError;
use crate::{BIT_CLEAR, BIT_SET, GROUP_SIZE};

/// Contracts an expanded UTF-256 stream back into its source bytes.
///
/// The stream must be a whole number of expansion groups
/// ([`DecodeError::MalformedLength`] otherwise) and every byte must be one
/// of the two sentinels ([`DecodeError::InvalidByte`] with the offending
/// value and its offset otherwise). Validation is fail-fast in stream order
/// and rejection is all-or-nothing: groups contracted before the failure are
/// discarded, never returned.
///
/// Each group contracts to one output byte, first sentinel = bit 7, which
/// makes this the exact inverse of [`encode`](crate::encode).
///
/// # Example
///
/// ```rust
/// use utf256_codec::{DecodeError, decode};
///
/// let expanded = [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF];
/// assert_eq!(decode(&expanded).unwrap(), b"A");
///
/// // Five bytes cannot hold whole expansion groups.
/// assert!(matches!(
///     decode(&[0x00; 5]),
///     Err(DecodeError::MalformedLength(5))
/// ));
/// ```
pub fn decode(expanded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if expanded.len() % GROUP_SIZE != 0 {
        return Err(DecodeError::MalformedLength(expanded.len()));
    }

    let mut source = Vec::with_capacity(expanded.len() / GROUP_SIZE);

    for (group_index, group) in expanded.chunks_exact(GROUP_SIZE).enumerate() {
        let mut byte = 0u8;

        for (bit_index, &sentinel) in group.iter().enumerate() {
            byte <<= 1;
            match sentinel {
                BIT_SET => byte |= 1,
                BIT_CLEAR => {}
                value => {
                    return Err(DecodeError::InvalidByte {
                        value,
                        offset: group_index * GROUP_SIZE + bit_index,
                    });
                }
            }
        }

        source.push(byte);
    }

    trace!(
        "contracted {} sentinel bytes into {} source bytes",
        expanded.len(),
        source.len()
    );

    Ok(source)
}

/// Reports whether `data` is a well-formed expanded stream.
///
/// True exactly when [`decode`] would succeed: the length is a whole number
/// of expansion groups and every byte is a sentinel. The empty stream is
/// well-formed. Useful for sniffing whether a file already carries UTF-256
/// content before committing to a direction.
///
/// ```rust
/// use utf256_codec::{encode, is_well_formed};
///
/// assert!(is_well_formed(&encode(b"text")));
/// assert!(!is_well_formed(b"text"));
/// ```
pub fn is_well_formed(data: &[u8]) -> bool {
    data.len() % GROUP_SIZE == 0 && data.iter().all(|&b| b == BIT_SET || b == BIT_CLEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    #[test]
    fn single_byte_vector() {
        let expanded = [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF];
        assert_eq!(decode(&expanded).unwrap(), b"A");
    }

    #[test]
    fn multi_byte_vector() {
        let expanded = encode(b"AB");
        assert_eq!(expanded.len(), 16);
        assert_eq!(decode(&expanded).unwrap(), b"AB");
    }

    #[test]
    fn empty_stream() {
        assert!(decode(b"").unwrap().is_empty());
    }

    #[test]
    fn rejects_partial_group_length() {
        assert!(matches!(
            decode(&[0x00; 5]),
            Err(DecodeError::MalformedLength(5))
        ));
    }

    #[test]
    fn rejects_non_sentinel_with_offset() {
        assert!(matches!(
            decode(&[0x00, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]),
            Err(DecodeError::InvalidByte {
                value: 0x01,
                offset: 2
            })
        ));
    }

    #[test]
    fn valid_leading_groups_do_not_survive_a_bad_one() {
        // First group decodes cleanly; the buffer is still rejected whole.
        let mut expanded = encode(b"AB");
        expanded[10] = 0x01;

        assert!(matches!(
            decode(&expanded),
            Err(DecodeError::InvalidByte {
                value: 0x01,
                offset: 10
            })
        ));
    }

    #[test]
    fn inverse_round_trip() {
        let well_formed = encode(b"UTF-256");
        assert_eq!(encode(&decode(&well_formed).unwrap()), well_formed);
    }

    #[test]
    fn probe_matches_decode_domain() {
        assert!(is_well_formed(b""));
        assert!(is_well_formed(&encode(b"probe")));

        // Sentinel-only but not a whole number of groups
        assert!(!is_well_formed(&[0x00; 9]));
        // Whole groups but a non-sentinel byte
        assert!(!is_well_formed(&[0x00, 0xFF, 0x00, 0x00, 0x42, 0x00, 0x00, 0x00]));

        for data in [&b""[..], &[0x00; 9][..], &[0x42; 8][..]] {
            assert_eq!(is_well_formed(data), decode(data).is_ok());
        }
    }
}
