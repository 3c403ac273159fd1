//! RFC 4648 base64 transcoding.
//!
//! This crate provides table-driven base64 encoding/decoding with:
//! - Standard and URL-safe alphabets, padded or unpadded
//! - Strict decoders for three padding expectations: automatic, required,
//!   forbidden
//! - A lenient decoder that never fails
//! - Shape-only and full-decodability validators
//! - An alphabet-tagged wrapper for carrying encoded values across API
//!   boundaries
//!
//! All operations are pure functions over immutable buffers and static
//! lookup tables; they may run concurrently without synchronization.
//!
//! # Example
//!
//! ```
//! use base64_kit::{decode, encode, Alphabet};
//!
//! let data = b"hello world";
//! let encoded = encode(data, Alphabet::Standard);
//! let decoded = decode(&encoded, Alphabet::Standard).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod decode_lenient;
mod decode_padded;
mod decode_unpadded;
mod encode;
mod encoded;
mod error;
mod quartets;
mod tables;
mod validate;

pub use alphabet::Alphabet;
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD, PAD_BYTE};
pub use decode::decode;
pub use decode_lenient::decode_lenient;
pub use decode_padded::decode_padded;
pub use decode_unpadded::decode_unpadded;
pub use encode::{encode, encode_string, encoded_len};
pub use encoded::Encoded;
pub use error::DecodeError;
pub use validate::{is_decodable, is_valid};
