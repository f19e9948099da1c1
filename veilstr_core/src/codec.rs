#![doc = r#"
# Permute+XOR codec

Reversible, length-preserving byte transform keyed by a single `u64`.

Encode composes two bijections, each driven by its own [`SplitMix64`]
generator seeded from the key:

1. a Fisher-Yates permutation of byte positions (permutation seed), then
2. an XOR against the low byte of successive generator draws (stream seed).

Decode regenerates the identical permutation (it depends only on the key and
the length, never the data) and undoes both steps in one fused pass.

This is obfuscation, not encryption: anyone holding the binary holds the key
and the algorithm. The goal is that `strings` and casual hex inspection come
up empty, with round-trip fidelity guaranteed for every key and every byte
sequence.
"#]

use crate::rng::SplitMix64;
use crate::{CodecError, SecretStr};

/// Key salt for the permutation generator. Fixed for interoperability:
/// independently built encoders and decoders must derive identical sub-keys.
const PERMUTE_SALT: u64 = 0xA5A5_A5A5_A5A5_A5A5;

/// Key salt for the keystream generator.
const STREAM_SALT: u64 = 0x5A5A_5A5A_5A5A_5A5A;

/// Position permutation for a payload of `n` bytes under `key`.
///
/// High-to-low Fisher-Yates with inclusive bound `i + 1`; draws exactly
/// `n - 1` values (none for `n <= 1`). Data-independent, so decode can
/// reconstruct it from `(key, n)` alone.
fn permutation(key: u64, n: usize) -> Vec<usize> {
    let mut p: Vec<usize> = (0..n).collect();
    let mut g = SplitMix64::new(key ^ PERMUTE_SALT);
    for i in (1..n).rev() {
        let j = (g.next_u64() % (i as u64 + 1)) as usize;
        p.swap(i, j);
    }
    p
}

/// Obfuscate `plain` under `key`. Total; output length equals input length.
pub fn encode(plain: &[u8], key: u64) -> Vec<u8> {
    let n = plain.len();
    if n == 0 {
        return Vec::new();
    }

    let p = permutation(key, n);
    let mut stream = SplitMix64::new(key ^ STREAM_SALT);

    // Gather through the permutation, then mask with the keystream.
    let mut out = Vec::with_capacity(n);
    for &src in &p {
        out.push(plain[src] ^ stream.next_byte());
    }
    out
}

/// Exact inverse of [`encode`]. Total; never fails on any `(bytes, key)`.
///
/// Fused single pass: each ciphertext byte is unmasked and scattered straight
/// to its original position (`out[p[i]] = ct[i] ^ keystream[i]`), avoiding the
/// intermediate un-XORed buffer a two-pass inverse would need.
pub fn decode_bytes(ct: &[u8], key: u64) -> Vec<u8> {
    let n = ct.len();
    if n == 0 {
        return Vec::new();
    }

    let p = permutation(key, n);
    let mut stream = SplitMix64::new(key ^ STREAM_SALT);

    let mut out = vec![0u8; n];
    for (i, &c) in ct.iter().enumerate() {
        out[p[i]] = c ^ stream.next_byte();
    }
    out
}

/// Decode and reinterpret as UTF-8 text.
///
/// For ciphertext produced by [`encode`] under the same key this cannot fail.
/// [`CodecError::CorruptPayload`] therefore always signals an integrity
/// problem upstream (mismatched key or damaged storage) and is surfaced as a
/// hard error instead of lossy replacement characters.
pub fn decode(ct: &[u8], key: u64) -> Result<SecretStr, CodecError> {
    let plain = decode_bytes(ct, key);
    Ok(SecretStr(String::from_utf8(plain)?))
}

/// Failure funnel for macro-expanded decode sites, where a corrupt payload is
/// unreachable unless the build itself is damaged.
#[cold]
#[inline(never)]
pub fn corrupt_payload() -> ! {
    panic!("veilstr: corrupt interned payload");
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_identity() {
        for key in [0u64, 1, 0x1234_5678_9ABC_DEF0, u64::MAX] {
            assert_eq!(encode(&[], key), Vec::<u8>::new());
            assert_eq!(decode_bytes(&[], key), Vec::<u8>::new());
            assert_eq!(&*decode(&[], key).unwrap(), "");
        }
    }

    #[test]
    fn single_byte_is_keystream_xor_only() {
        // Length 1 leaves the permutation loop empty; the output is the
        // plaintext byte masked with exactly one stream draw.
        let key = 0x0000_0000_0000_0001u64;
        let ct = encode(b"X", key);

        let mut stream = SplitMix64::new(key ^ STREAM_SALT);
        assert_eq!(ct, vec![b'X' ^ stream.next_byte()]);
        assert_eq!(ct, vec![0x69]);

        assert_eq!(&*decode(&ct, key).unwrap(), "X");
    }

    #[test]
    fn round_trip_utf8_samples() {
        let samples: &[&str] = &[
            "a",
            "hello world",
            "_privateSetFrame:",
            "héllo wörld",
            "日本語のテキスト",
            "emoji: 🌍🚀✓",
            "line\nbreak\tand\0nul",
        ];
        for (i, s) in samples.iter().enumerate() {
            let key = 0x9E37_79B9_7F4A_7C15u64.wrapping_mul(i as u64 + 1);
            let ct = encode(s.as_bytes(), key);
            assert_eq!(ct.len(), s.len());
            assert_eq!(&*decode(&ct, key).unwrap(), *s);
        }
    }

    #[test]
    fn long_pattern_round_trips() {
        let key = u64::MAX;
        let plain: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
        let ct = encode(&plain, key);
        assert_eq!(ct.len(), 1000);
        assert_ne!(ct, plain);
        assert_eq!(decode_bytes(&ct, key), plain);
    }

    #[test]
    fn encode_is_deterministic() {
        let key = 0xCAFE_F00D_DEAD_2BADu64;
        let plain = b"determinism check";
        assert_eq!(encode(plain, key), encode(plain, key));
    }

    #[test]
    fn distinct_keys_distinct_ciphertexts() {
        let plain = b"key sensitivity";
        let keys = [0u64, 1, 2, 0xDEAD_BEEF_CAFE_BABE, u64::MAX];
        for (a, ka) in keys.iter().enumerate() {
            for kb in &keys[a + 1..] {
                assert_ne!(encode(plain, *ka), encode(plain, *kb));
            }
        }
    }

    // Regression: no contiguous 4-byte slice of the ciphertext may match a
    // contiguous 4-byte slice of the plaintext. A weak heuristic, kept only
    // to catch the codec degenerating into a near-identity transform.
    #[test]
    fn no_four_byte_plaintext_leak() {
        let plain = b"_privateSetFrame:";
        let ct = encode(plain, 0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(ct.len(), plain.len());
        for cw in ct.windows(4) {
            for pw in plain.windows(4) {
                assert_ne!(cw, pw);
            }
        }
    }

    // Fixed ciphertext guarding the wire format: the salts, the shuffle
    // direction, and the keystream truncation must never drift, or stored
    // payloads from older builds stop decoding.
    #[test]
    fn golden_vector() {
        let key = 0x0123_4567_89AB_CDEFu64;
        let ct = encode(b"obfuscation", key);
        assert_eq!(ct, vec![8, 193, 8, 40, 113, 22, 93, 149, 7, 73, 243]);
        assert_eq!(&*decode(&ct, key).unwrap(), "obfuscation");
    }

    #[test]
    fn permutation_is_a_bijection() {
        for n in [0usize, 1, 2, 3, 17, 256] {
            let p = permutation(0x5EED_5EED_5EED_5EED, n);
            assert_eq!(p.len(), n);
            let mut seen = vec![false; n];
            for &i in &p {
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
    }

    #[test]
    fn mismatched_key_surfaces_corrupt_payload() {
        // Multi-byte UTF-8 plaintext so a wrong key almost surely yields
        // invalid UTF-8 rather than garbage ASCII.
        let plain = "🌍🌎🌏🌍🌎🌏";
        let ct = encode(plain.as_bytes(), 7);
        match decode(&ct, 8) {
            Err(CodecError::CorruptPayload(_)) => {}
            Ok(s) => assert_ne!(&*s, plain),
        }
    }

    proptest! {
        #[test]
        fn round_trip_any_bytes(
            plain in proptest::collection::vec(any::<u8>(), 0..512),
            key in any::<u64>(),
        ) {
            let ct = encode(&plain, key);
            prop_assert_eq!(ct.len(), plain.len());
            prop_assert_eq!(decode_bytes(&ct, key), plain);
        }

        #[test]
        fn round_trip_any_text(s in ".{0,64}", key in any::<u64>()) {
            let ct = encode(s.as_bytes(), key);
            prop_assert_eq!(&*decode(&ct, key).unwrap(), s.as_str());
        }
    }
}
