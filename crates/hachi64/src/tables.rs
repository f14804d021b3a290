//! Lazily built lookup tables derived from the alphabet.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::ALPHABET;

static ALPHABET_CHARS: OnceLock<[char; 64]> = OnceLock::new();
static REVERSE_MAP: OnceLock<HashMap<char, u8>> = OnceLock::new();

/// Forward table mapping each 6-bit value to its alphabet character.
pub(crate) fn alphabet_chars() -> &'static [char; 64] {
    ALPHABET_CHARS.get_or_init(|| {
        let chars: Vec<char> = ALPHABET.chars().collect();
        chars
            .try_into()
            .expect("alphabet must be exactly 64 characters")
    })
}

/// Reverse table mapping each alphabet character back to its 6-bit value.
///
/// The alphabet is multi-byte in UTF-8, so the table is keyed by `char`
/// rather than indexed by byte value.
pub(crate) fn reverse_map() -> &'static HashMap<char, u8> {
    REVERSE_MAP.get_or_init(|| {
        ALPHABET
            .chars()
            .enumerate()
            .map(|(i, c)| (c, i as u8))
            .collect()
    })
}
