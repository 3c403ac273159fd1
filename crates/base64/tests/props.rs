//! Property tests for the round-trip, length, and totality laws.

use base64_kit::{
    decode, decode_lenient, decode_padded, decode_unpadded, encode, encoded_len, is_decodable,
    is_valid, Alphabet,
};
use proptest::prelude::*;

fn any_alphabet() -> impl Strategy<Value = Alphabet> {
    prop_oneof![
        Just(Alphabet::Standard),
        Just(Alphabet::StandardNoPad),
        Just(Alphabet::UrlSafe),
        Just(Alphabet::UrlSafeNoPad),
    ]
}

proptest! {
    #[test]
    fn round_trip(data in proptest::collection::vec(any::<u8>(), 0..512), alphabet in any_alphabet()) {
        let encoded = encode(&data, alphabet);
        prop_assert_eq!(decode(&encoded, alphabet).unwrap(), data);
    }

    #[test]
    fn padded_round_trip_through_strict_mode(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data, Alphabet::UrlSafe);
        prop_assert_eq!(decode_padded(&encoded, Alphabet::UrlSafe).unwrap(), data);
    }

    #[test]
    fn unpadded_round_trip_through_strict_mode(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data, Alphabet::UrlSafeNoPad);
        prop_assert_eq!(decode_unpadded(&encoded, Alphabet::UrlSafe).unwrap(), data);
    }

    #[test]
    fn length_laws(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let n = data.len();
        prop_assert_eq!(encode(&data, Alphabet::Standard).len(), 4 * n.div_ceil(3));
        prop_assert_eq!(encode(&data, Alphabet::StandardNoPad).len(), (4 * n).div_ceil(3));
        prop_assert_eq!(encoded_len(n, Alphabet::Standard), 4 * n.div_ceil(3));
    }

    #[test]
    fn lenient_is_total(noise in proptest::collection::vec(any::<u8>(), 0..512), alphabet in any_alphabet()) {
        // Any byte sequence at all; must not panic, whatever it returns.
        let _ = decode_lenient(&noise, alphabet);
    }

    #[test]
    fn lenient_agrees_with_strict_on_encoder_output(data in proptest::collection::vec(any::<u8>(), 0..512), alphabet in any_alphabet()) {
        let encoded = encode(&data, alphabet);
        prop_assert_eq!(decode_lenient(&encoded, alphabet), data);
    }

    #[test]
    fn lenient_sees_only_the_prefix(data in proptest::collection::vec(any::<u8>(), 0..256), noise in proptest::collection::vec(any::<u8>(), 1..64)) {
        let prefix = encode(&data, Alphabet::StandardNoPad);
        let mut corrupted = prefix.clone();
        corrupted.push(b'*');
        corrupted.extend_from_slice(&noise);
        prop_assert_eq!(
            decode_lenient(&corrupted, Alphabet::Standard),
            decode_lenient(&prefix, Alphabet::Standard)
        );
    }

    #[test]
    fn decodable_implies_valid(noise in proptest::collection::vec(any::<u8>(), 0..64), alphabet in any_alphabet()) {
        if is_decodable(&noise, alphabet) {
            prop_assert!(is_valid(&noise, alphabet));
        }
    }

    #[test]
    fn validators_accept_padded_encoder_output(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data, Alphabet::Standard);
        prop_assert!(is_valid(&encoded, Alphabet::Standard));
        prop_assert!(is_decodable(&encoded, Alphabet::Standard));
    }
}
