//! Base64 encoding.

use crate::alphabet::Alphabet;
use crate::constants::PAD_BYTE;

/// Exact encoded length of `n` input bytes under `alphabet`.
///
/// Padded alphabets always produce a multiple of 4; unpadded alphabets
/// produce `ceil(4n / 3)` bytes.
pub fn encoded_len(n: usize, alphabet: Alphabet) -> usize {
    if alphabet.is_padded() {
        n.div_ceil(3) * 4
    } else {
        (n * 4).div_ceil(3)
    }
}

/// Encodes a byte slice to base64.
///
/// Processes the input in 3-byte chunks, mapping each 24-bit group to four
/// output symbols through a pre-computed two-symbol pair table. A trailing
/// 1- or 2-byte remainder emits 2 or 3 data symbols, followed by `=` padding
/// when `alphabet` is a padded variant and nothing otherwise.
///
/// Pure function of its inputs; the output buffer is freshly allocated and
/// exclusively owned by the caller.
///
/// # Example
///
/// ```
/// use base64_kit::{encode, Alphabet};
///
/// assert_eq!(encode(b"hello world", Alphabet::Standard), b"aGVsbG8gd29ybGQ=");
/// assert_eq!(encode(b"hello world", Alphabet::UrlSafeNoPad), b"aGVsbG8gd29ybGQ");
/// ```
pub fn encode(data: &[u8], alphabet: Alphabet) -> Vec<u8> {
    let pairs = alphabet.pair_table();
    let chars = alphabet.encode_table();

    let length = data.len();
    let extra_length = length % 3;
    let base_length = length - extra_length;
    let mut out = Vec::with_capacity(encoded_len(length, alphabet));

    let mut i = 0;
    while i < base_length {
        let o1 = data[i] as usize;
        let o2 = data[i + 1] as usize;
        let o3 = data[i + 2] as usize;
        let v1 = (o1 << 4) | (o2 >> 4);
        let v2 = ((o2 & 0b1111) << 8) | o3;

        out.extend_from_slice(&pairs[v1]);
        out.extend_from_slice(&pairs[v2]);
        i += 3;
    }

    if extra_length == 1 {
        let v1 = (data[base_length] as usize) << 4;
        out.extend_from_slice(&pairs[v1]);
        if alphabet.is_padded() {
            out.push(PAD_BYTE);
            out.push(PAD_BYTE);
        }
    } else if extra_length == 2 {
        let o1 = data[base_length] as usize;
        let o2 = data[base_length + 1] as usize;
        let v1 = (o1 << 4) | (o2 >> 4);
        let v2 = (o2 & 0b1111) << 2;

        out.extend_from_slice(&pairs[v1]);
        out.push(chars[v2]);
        if alphabet.is_padded() {
            out.push(PAD_BYTE);
        }
    }

    out
}

/// Encodes a byte slice to a base64 `String`.
///
/// Convenience over [`encode`] for callers that want a text container; the
/// encoded output is always pure ASCII.
///
/// # Example
///
/// ```
/// use base64_kit::{encode_string, Alphabet};
///
/// assert_eq!(encode_string(b"foob", Alphabet::Standard), "Zm9vYg==");
/// ```
pub fn encode_string(data: &[u8], alphabet: Alphabet) -> String {
    encode(data, alphabet).into_iter().map(char::from).collect()
}
