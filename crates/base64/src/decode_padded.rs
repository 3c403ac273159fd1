//! Strict decoding that requires padded input.

use crate::alphabet::Alphabet;
use crate::error::DecodeError;
use crate::quartets::decode_quartets;

/// Decodes base64 whose length must already be a multiple of 4.
///
/// # Errors
///
/// [`DecodeError::PaddingRequired`] when the length is not a multiple of 4;
/// otherwise the same errors as [`decode`](crate::decode).
///
/// # Example
///
/// ```
/// use base64_kit::{decode_padded, Alphabet, DecodeError};
///
/// assert_eq!(decode_padded(b"Zm8=", Alphabet::Standard).unwrap(), b"fo");
/// assert_eq!(
///     decode_padded(b"Zm8", Alphabet::Standard),
///     Err(DecodeError::PaddingRequired(3))
/// );
/// ```
pub fn decode_padded(input: &[u8], alphabet: Alphabet) -> Result<Vec<u8>, DecodeError> {
    if input.len() % 4 != 0 {
        return Err(DecodeError::PaddingRequired(input.len()));
    }
    decode_quartets(input, 0, alphabet.decode_table())
}
