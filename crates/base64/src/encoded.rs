//! Alphabet-tagged encoded values.

use crate::alphabet::Alphabet;
use crate::decode_padded::decode_padded;
use crate::decode_unpadded::decode_unpadded;
use crate::encode::encode;
use crate::error::DecodeError;
use crate::validate::is_valid;

/// A base64 payload together with the [`Alphabet`] it claims to conform to.
///
/// The tag is a contract, not a proof. Values produced by [`Encoded::encode`]
/// satisfy it by construction; [`Encoded::assert`] records an unchecked
/// caller claim. The payload itself is indistinguishable from a bare byte
/// vector; the wrapper exists so code that consumes, say, URL-safe base64
/// can demand a value tagged as such instead of silently accepting anything.
///
/// Consuming operations read the alphabet from the tag, so a decode against
/// the wrong alphabet cannot be expressed through this type.
///
/// # Example
///
/// ```
/// use base64_kit::{Alphabet, Encoded};
///
/// let token = Encoded::encode(b"<<?>>", Alphabet::UrlSafe);
/// assert_eq!(token.as_bytes(), b"PDw_Pj4=");
/// assert_eq!(token.decode().unwrap(), b"<<?>>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Encoded {
    alphabet: Alphabet,
    bytes: Vec<u8>,
}

impl Encoded {
    /// Encodes `data` under `alphabet`; the resulting tag holds by
    /// construction.
    pub fn encode(data: &[u8], alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            bytes: encode(data, alphabet),
        }
    }

    /// Wraps `bytes` under an *unchecked* claim that they are valid base64 of
    /// `alphabet`.
    ///
    /// Nothing re-validates the payload here; the claim is trusted as-is and
    /// correctness is entirely the caller's responsibility. A wrong claim
    /// does not corrupt anything, but it silently breaks the alphabet
    /// contract for downstream consumers: [`Encoded::decode`] will fail, and
    /// code that forwards the payload as alphabet-conformant text will
    /// forward garbage.
    pub fn assert(bytes: Vec<u8>, alphabet: Alphabet) -> Self {
        Self { alphabet, bytes }
    }

    /// The alphabet this value is tagged with.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The encoded payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the wrapper, returning the payload.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decodes the payload in the padding mode its tag prescribes: padded
    /// tags require padding, unpadded tags reject it.
    ///
    /// Values from [`Encoded::encode`] always succeed. Values from
    /// [`Encoded::assert`] fail here with the usual [`DecodeError`] if the
    /// recorded claim was wrong.
    pub fn decode(&self) -> Result<Vec<u8>, DecodeError> {
        if self.alphabet.is_padded() {
            decode_padded(&self.bytes, self.alphabet)
        } else {
            decode_unpadded(&self.bytes, self.alphabet)
        }
    }

    /// Shape check of the payload against the tagged alphabet.
    pub fn is_valid(&self) -> bool {
        is_valid(&self.bytes, self.alphabet)
    }
}
