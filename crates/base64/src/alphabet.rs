//! Alphabet and padding selection.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES};
use crate::tables::{STANDARD_DECODE, STANDARD_PAIRS, URL_DECODE, URL_PAIRS};

/// Which base64 alphabet and padding rule an operation uses.
///
/// The choice is always made at the call site; nothing in this crate infers
/// an alphabet from input content. Padding only affects *encoding* output and
/// the tag-directed decode on [`Encoded`](crate::Encoded); the strict
/// decoders select their padding expectation by entry point instead.
///
/// # Example
///
/// ```
/// use base64_kit::{encode, Alphabet};
///
/// assert_eq!(encode(b"fo", Alphabet::Standard), b"Zm8=");
/// assert_eq!(encode(b"fo", Alphabet::StandardNoPad), b"Zm8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// RFC 4648 §4 alphabet (`+`, `/`), `=`-padded output.
    Standard,
    /// RFC 4648 §4 alphabet, unpadded output.
    StandardNoPad,
    /// RFC 4648 §5 URL-safe alphabet (`-`, `_`), `=`-padded output.
    UrlSafe,
    /// RFC 4648 §5 URL-safe alphabet, unpadded output.
    UrlSafeNoPad,
}

impl Alphabet {
    /// Whether encoders append `=` padding for this alphabet.
    pub fn is_padded(self) -> bool {
        matches!(self, Alphabet::Standard | Alphabet::UrlSafe)
    }

    /// The variant with the same character set and the given padding rule.
    ///
    /// ```
    /// use base64_kit::Alphabet;
    ///
    /// assert_eq!(Alphabet::UrlSafe.with_padding(false), Alphabet::UrlSafeNoPad);
    /// assert_eq!(Alphabet::StandardNoPad.with_padding(true), Alphabet::Standard);
    /// ```
    pub fn with_padding(self, padded: bool) -> Alphabet {
        match (self, padded) {
            (Alphabet::Standard | Alphabet::StandardNoPad, true) => Alphabet::Standard,
            (Alphabet::Standard | Alphabet::StandardNoPad, false) => Alphabet::StandardNoPad,
            (Alphabet::UrlSafe | Alphabet::UrlSafeNoPad, true) => Alphabet::UrlSafe,
            (Alphabet::UrlSafe | Alphabet::UrlSafeNoPad, false) => Alphabet::UrlSafeNoPad,
        }
    }

    pub(crate) fn encode_table(self) -> &'static [u8; 64] {
        match self {
            Alphabet::Standard | Alphabet::StandardNoPad => ALPHABET_BYTES,
            Alphabet::UrlSafe | Alphabet::UrlSafeNoPad => ALPHABET_URL_BYTES,
        }
    }

    pub(crate) fn pair_table(self) -> &'static [[u8; 2]; 4096] {
        match self {
            Alphabet::Standard | Alphabet::StandardNoPad => &STANDARD_PAIRS,
            Alphabet::UrlSafe | Alphabet::UrlSafeNoPad => &URL_PAIRS,
        }
    }

    pub(crate) fn decode_table(self) -> &'static [u8; 256] {
        match self {
            Alphabet::Standard | Alphabet::StandardNoPad => &STANDARD_DECODE,
            Alphabet::UrlSafe | Alphabet::UrlSafeNoPad => &URL_DECODE,
        }
    }
}
