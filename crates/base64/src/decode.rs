//! Strict decoding with automatic padding handling.

use crate::alphabet::Alphabet;
use crate::error::DecodeError;
use crate::quartets::decode_quartets;

/// Decodes base64, accepting both padded and unpadded input.
///
/// A length congruent to 2 or 3 modulo 4 is treated as unpadded and the
/// missing `=` bytes are implied; a multiple of 4 is used as-is. A length
/// congruent to 1 cannot be repaired by any padding and is rejected.
///
/// # Errors
///
/// [`DecodeError::InvalidLength`] for lengths ≡ 1 (mod 4),
/// [`DecodeError::InvalidCharacter`] for bytes outside the alphabet, and
/// [`DecodeError::MisplacedPadding`] for `=` outside the tail of the final
/// group.
///
/// # Example
///
/// ```
/// use base64_kit::{decode, Alphabet};
///
/// assert_eq!(decode(b"Zm8=", Alphabet::Standard).unwrap(), b"fo");
/// assert_eq!(decode(b"Zm8", Alphabet::Standard).unwrap(), b"fo");
/// ```
pub fn decode(input: &[u8], alphabet: Alphabet) -> Result<Vec<u8>, DecodeError> {
    let table = alphabet.decode_table();
    match input.len() % 4 {
        0 => decode_quartets(input, 0, table),
        2 => decode_quartets(input, 2, table),
        3 => decode_quartets(input, 1, table),
        _ => Err(DecodeError::InvalidLength(input.len())),
    }
}
