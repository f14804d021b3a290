//! Tests for Hachi64 encoding (encode).

use hachi64::{encode, encoded_len, ALPHABET, PAD};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob, true);
        let expected = reference_encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b"", true), "");
    assert_eq!(encode(b"", false), "");
}

#[test]
fn single_byte() {
    assert_eq!(encode(b"a", true), "西律==");
}

#[test]
fn two_bytes() {
    assert_eq!(encode(b"ab", true), "西阿迷=");
}

#[test]
fn three_bytes() {
    assert_eq!(encode(b"abc", true), "西阿南呀");
}

#[test]
fn hello_world() {
    assert_eq!(
        encode(b"Hello, World!", true),
        "豆米啊拢嘎米多拢迷集伽漫咖苦播库迷律=="
    );
}

#[test]
fn no_padding_mode_omits_pads() {
    for _ in 0..100 {
        let blob = generate_blob();
        let padded = encode(&blob, true);
        let unpadded = encode(&blob, false);
        assert_eq!(padded.trim_end_matches(PAD), unpadded);
        assert!(!unpadded.contains(PAD));
    }
}

#[test]
fn output_stays_in_alphabet() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob, true);
        for c in encoded.chars() {
            assert!(
                ALPHABET.contains(c) || c == PAD,
                "Unexpected output character: {}",
                c
            );
        }
    }
}

#[test]
fn alphabet_shape() {
    let chars: Vec<char> = ALPHABET.chars().collect();
    assert_eq!(chars.len(), 64);
    let unique: std::collections::HashSet<char> = chars.iter().copied().collect();
    assert_eq!(unique.len(), 64);
    assert!(!chars.contains(&PAD));
}

#[test]
fn covers_whole_alphabet() {
    let blob: Vec<u8> = (0..=255).collect();
    let encoded = encode(&blob, true);
    for c in ALPHABET.chars() {
        assert!(encoded.contains(c), "Symbol {} never produced", c);
    }
}

#[test]
fn length_matches_formula() {
    for _ in 0..100 {
        let blob = generate_blob();
        assert_eq!(
            encode(&blob, true).chars().count(),
            encoded_len(blob.len(), true)
        );
        assert_eq!(
            encode(&blob, false).chars().count(),
            encoded_len(blob.len(), false)
        );
    }
}

/// Simple accumulator-based encoder for test verification.
fn reference_encode(data: &[u8]) -> String {
    let table: Vec<char> = ALPHABET.chars().collect();
    let mut out = String::new();

    for chunk in data.chunks(3) {
        let mut group: u32 = 0;
        for (i, &byte) in chunk.iter().enumerate() {
            group |= (byte as u32) << (16 - 8 * i);
        }

        let symbols = chunk.len() + 1;
        for i in 0..4 {
            if i < symbols {
                out.push(table[((group >> (18 - 6 * i)) & 0x3F) as usize]);
            } else {
                out.push(PAD);
            }
        }
    }

    out
}
