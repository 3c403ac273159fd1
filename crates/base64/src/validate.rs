//! Shape and decodability predicates.

use crate::alphabet::Alphabet;
use crate::decode::decode;
use crate::tables::{INVALID, PAD_SENTINEL};

/// Shape-only base64 check.
///
/// True when every byte is a data symbol or `=`, the total length is a
/// multiple of 4, and `=` occurs only in the last two byte positions.
///
/// This is weaker than a successful strict decode: a shape-valid string can
/// still break the padding-placement rules. `b"Zg=a"` keeps its `=` inside
/// the last two positions yet is not terminal, so strict decoding rejects it.
/// Use [`is_decodable`] when decode-level confidence is needed; every string
/// accepted there is also accepted here.
pub fn is_valid(input: &[u8], alphabet: Alphabet) -> bool {
    if input.len() % 4 != 0 {
        return false;
    }
    let table = alphabet.decode_table();
    let tail = input.len().saturating_sub(2);
    for (i, &b) in input.iter().enumerate() {
        match table[b as usize] {
            INVALID => return false,
            PAD_SENTINEL if i < tail => return false,
            _ => {}
        }
    }
    true
}

/// Full base64 check: shape-valid and accepted by the strict decoder.
///
/// Equivalent to `is_valid(input, alphabet) && decode(input, alphabet).is_ok()`
/// with the automatic-padding decoder.
pub fn is_decodable(input: &[u8], alphabet: Alphabet) -> bool {
    is_valid(input, alphabet) && decode(input, alphabet).is_ok()
}
