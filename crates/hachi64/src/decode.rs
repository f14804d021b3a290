//! Hachi64 decoding function.

use std::collections::HashMap;

use crate::constants::PAD;
use crate::tables::reverse_map;
use crate::Hachi64Error;

/// Decodes a Hachi64 string back to bytes.
///
/// Characters are consumed in groups of four and reassembled into three
/// bytes. A trailing group of two or three characters yields one or two
/// bytes; a trailing group of a single character carries fewer than eight
/// bits and yields nothing.
///
/// With `padding` enabled, trailing `=` characters are stripped before
/// decoding and their count is not checked against the final group, so
/// under-padded and over-padded inputs both decode. A `=` anywhere else,
/// or any character outside the alphabet, is an error.
///
/// # Arguments
///
/// * `encoded` - The Hachi64 string to decode.
/// * `padding` - Whether trailing `=` padding is accepted and stripped.
///
/// # Returns
///
/// The decoded bytes.
///
/// # Errors
///
/// Returns [`Hachi64Error::InvalidCharacter`] naming the first offending
/// character.
///
/// # Example
///
/// ```
/// use hachi64::decode;
///
/// assert_eq!(decode("豆米啊拢嘎米多=", true).unwrap(), b"Hello");
/// assert_eq!(decode("豆米啊拢嘎米多", false).unwrap(), b"Hello");
/// ```
pub fn decode(encoded: &str, padding: bool) -> Result<Vec<u8>, Hachi64Error> {
    let stripped = if padding {
        encoded.trim_end_matches(PAD)
    } else {
        encoded
    };

    let map = reverse_map();
    let chars: Vec<char> = stripped.chars().collect();
    let mut out = Vec::with_capacity(chars.len() / 4 * 3 + (chars.len() % 4).saturating_sub(1));

    for chunk in chars.chunks(4) {
        let idx1 = lookup(map, chunk[0])?;
        let idx2 = match chunk.get(1) {
            Some(&c) => lookup(map, c)?,
            None => 0,
        };
        let idx3 = match chunk.get(2) {
            Some(&c) => lookup(map, c)?,
            None => 0,
        };
        let idx4 = match chunk.get(3) {
            Some(&c) => lookup(map, c)?,
            None => 0,
        };

        if chunk.len() > 1 {
            out.push((idx1 << 2) | (idx2 >> 4));
        }
        if chunk.len() > 2 {
            out.push(((idx2 & 0x0F) << 4) | (idx3 >> 2));
        }
        if chunk.len() > 3 {
            out.push(((idx3 & 0x03) << 6) | idx4);
        }
    }

    Ok(out)
}

fn lookup(map: &HashMap<char, u8>, c: char) -> Result<u8, Hachi64Error> {
    map.get(&c)
        .copied()
        .ok_or(Hachi64Error::InvalidCharacter(c))
}
