//! Strict decoding that rejects padded input.

use crate::alphabet::Alphabet;
use crate::constants::PAD_BYTE;
use crate::decode::decode;
use crate::error::DecodeError;

/// Decodes base64 that must not carry `=` padding.
///
/// Only the last two bytes are scanned for `=`, the only positions padding
/// can legally occupy; a `=` elsewhere falls through to the strict decoder
/// and reports [`DecodeError::MisplacedPadding`].
///
/// # Errors
///
/// [`DecodeError::PaddingNotAllowed`] when either of the last two bytes is
/// `=`; otherwise the same errors as [`decode`].
///
/// # Example
///
/// ```
/// use base64_kit::{decode_unpadded, Alphabet, DecodeError};
///
/// assert_eq!(decode_unpadded(b"Zm8", Alphabet::Standard).unwrap(), b"fo");
/// assert_eq!(
///     decode_unpadded(b"Zm8=", Alphabet::Standard),
///     Err(DecodeError::PaddingNotAllowed)
/// );
/// ```
pub fn decode_unpadded(input: &[u8], alphabet: Alphabet) -> Result<Vec<u8>, DecodeError> {
    let tail = input.len().saturating_sub(2);
    if input[tail..].contains(&PAD_BYTE) {
        return Err(DecodeError::PaddingNotAllowed);
    }
    decode(input, alphabet)
}
