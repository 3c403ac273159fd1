//! Decode failure taxonomy.

use thiserror::Error;

/// Errors returned by the strict decoders.
///
/// Every failure is an ordinary value; no decoder panics or aborts on
/// malformed input. The lenient decoder and the validators never produce
/// these at all.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input length is congruent to 1 modulo 4. A lone trailing symbol holds
    /// only 6 bits, so no padding scheme can repair this.
    #[error("invalid base64 length {0}: a single trailing symbol cannot hold a byte")]
    InvalidLength(usize),
    /// The padded decoder was given input whose length is not a multiple of 4.
    #[error("input length {0} requires padding to a multiple of 4")]
    PaddingRequired(usize),
    /// The unpadded decoder was given input ending in a padding character.
    #[error("unpadded input must not contain a padding character")]
    PaddingNotAllowed,
    /// A byte outside the alphabet was encountered during strict decode.
    #[error("invalid byte {byte:#04x} at offset {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },
    /// A `=` appeared somewhere other than the tail of the final group, or as
    /// an incomplete padding combination.
    #[error("misplaced padding character at offset {0}")]
    MisplacedPadding(usize),
}
