//! Strict quartet decoding shared by the padding-mode entry points.

use crate::error::DecodeError;
use crate::tables::{INVALID, PAD_SENTINEL};

/// Decodes `input` plus `virtual_pad` implied trailing `=` bytes.
///
/// The entry points normalize the input's padding shape by *counting* the
/// missing padding instead of reallocating the input; positions past the real
/// input read as the PAD sentinel. The caller guarantees
/// `input.len() + virtual_pad` is a multiple of 4 and `virtual_pad <= 2`.
pub(crate) fn decode_quartets(
    input: &[u8],
    virtual_pad: usize,
    table: &[u8; 256],
) -> Result<Vec<u8>, DecodeError> {
    debug_assert!(virtual_pad <= 2);
    debug_assert!((input.len() + virtual_pad) % 4 == 0);

    let total = input.len() + virtual_pad;
    if total == 0 {
        return Ok(Vec::new());
    }

    let main_length = total - 4;
    let mut out = Vec::with_capacity((total / 4) * 3);

    let mut i = 0;
    while i < main_length {
        let s0 = table[input[i] as usize];
        let s1 = table[input[i + 1] as usize];
        let s2 = table[input[i + 2] as usize];
        let s3 = table[input[i + 3] as usize];

        // Bit 7 of the OR flags a byte outside the alphabet, bit 6 a `=`;
        // data sextets set neither. One check classifies the whole quartet.
        let combined = s0 | s1 | s2 | s3;
        if combined & 0x80 != 0 {
            return Err(invalid_at(input, i, table));
        }
        if combined & 0x40 != 0 {
            // `=` is only legal in the final quartet.
            return Err(DecodeError::MisplacedPadding(pad_at(input, i, table)));
        }

        out.push((s0 << 2) | (s1 >> 4));
        out.push((s1 << 4) | (s2 >> 2));
        out.push((s2 << 6) | s3);
        i += 4;
    }

    // Final quartet; positions past the real input are implied padding.
    let lookup = |k: usize| -> u8 {
        if k < input.len() {
            table[input[k] as usize]
        } else {
            PAD_SENTINEL
        }
    };
    let s0 = lookup(main_length);
    let s1 = lookup(main_length + 1);
    let s2 = lookup(main_length + 2);
    let s3 = lookup(main_length + 3);

    if (s0 | s1 | s2 | s3) & 0x80 != 0 {
        return Err(invalid_at(input, main_length, table));
    }
    if s0 == PAD_SENTINEL || s1 == PAD_SENTINEL {
        return Err(DecodeError::MisplacedPadding(pad_at(input, main_length, table)));
    }
    if s2 == PAD_SENTINEL && s3 != PAD_SENTINEL {
        // `x=` followed by a data symbol is an incomplete padding combination.
        return Err(DecodeError::MisplacedPadding(main_length + 2));
    }

    out.push((s0 << 2) | (s1 >> 4));
    if s2 != PAD_SENTINEL {
        out.push((s1 << 4) | (s2 >> 2));
        if s3 != PAD_SENTINEL {
            out.push((s2 << 6) | s3);
        }
    }

    Ok(out)
}

/// Cold-path rescan of a rejected quartet for the first out-of-alphabet byte.
fn invalid_at(input: &[u8], group: usize, table: &[u8; 256]) -> DecodeError {
    let end = input.len().min(group + 4);
    let mut found = (group, input[group]);
    for (k, &b) in input.iter().enumerate().take(end).skip(group) {
        if table[b as usize] == INVALID {
            found = (k, b);
            break;
        }
    }
    DecodeError::InvalidCharacter {
        offset: found.0,
        byte: found.1,
    }
}

/// Cold-path rescan of a rejected quartet for the first `=`.
fn pad_at(input: &[u8], group: usize, table: &[u8; 256]) -> usize {
    let end = input.len().min(group + 4);
    for (k, &b) in input.iter().enumerate().take(end).skip(group) {
        if table[b as usize] == PAD_SENTINEL {
            return k;
        }
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::STANDARD_DECODE;

    #[test]
    fn empty_input() {
        assert_eq!(decode_quartets(b"", 0, &STANDARD_DECODE).unwrap(), b"");
    }

    #[test]
    fn full_quartets() {
        assert_eq!(decode_quartets(b"Zm9v", 0, &STANDARD_DECODE).unwrap(), b"foo");
        assert_eq!(
            decode_quartets(b"Zm9vYmFy", 0, &STANDARD_DECODE).unwrap(),
            b"foobar"
        );
    }

    #[test]
    fn real_and_virtual_padding_agree() {
        assert_eq!(decode_quartets(b"Zg==", 0, &STANDARD_DECODE).unwrap(), b"f");
        assert_eq!(decode_quartets(b"Zg", 2, &STANDARD_DECODE).unwrap(), b"f");
        assert_eq!(decode_quartets(b"Zm8=", 0, &STANDARD_DECODE).unwrap(), b"fo");
        assert_eq!(decode_quartets(b"Zm8", 1, &STANDARD_DECODE).unwrap(), b"fo");
    }

    #[test]
    fn mixed_real_and_virtual_padding() {
        // One real `=` plus one implied: still one decoded byte.
        assert_eq!(decode_quartets(b"Zg=", 1, &STANDARD_DECODE).unwrap(), b"f");
    }

    #[test]
    fn invalid_byte_reports_offset() {
        assert_eq!(
            decode_quartets(b"Zm!v", 0, &STANDARD_DECODE),
            Err(DecodeError::InvalidCharacter {
                offset: 2,
                byte: b'!'
            })
        );
    }

    #[test]
    fn pad_in_non_final_quartet() {
        assert_eq!(
            decode_quartets(b"Zm8=Zm8=", 0, &STANDARD_DECODE),
            Err(DecodeError::MisplacedPadding(3))
        );
    }

    #[test]
    fn pad_in_leading_positions_of_final_quartet() {
        assert_eq!(
            decode_quartets(b"=m9v", 0, &STANDARD_DECODE),
            Err(DecodeError::MisplacedPadding(0))
        );
        assert_eq!(
            decode_quartets(b"Z==v", 0, &STANDARD_DECODE),
            Err(DecodeError::MisplacedPadding(1))
        );
    }

    #[test]
    fn incomplete_padding_combination() {
        assert_eq!(
            decode_quartets(b"Zm=v", 0, &STANDARD_DECODE),
            Err(DecodeError::MisplacedPadding(2))
        );
    }
}
