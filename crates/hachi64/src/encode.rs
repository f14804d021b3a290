//! Hachi64 encoding function.

use crate::constants::PAD;
use crate::encoded_len::encoded_len;
use crate::tables::alphabet_chars;

/// Encodes a byte slice to a Hachi64 string.
///
/// Input bytes are consumed in groups of three and re-split into four
/// 6-bit values, each mapped to one alphabet character. A trailing group
/// of one or two bytes produces two or three characters; with `padding`
/// enabled the group is filled up to four characters with `=`.
///
/// # Arguments
///
/// * `data` - The bytes to encode.
/// * `padding` - Whether to pad the output to a multiple of four characters.
///
/// # Returns
///
/// The Hachi64-encoded string.
///
/// # Example
///
/// ```
/// use hachi64::encode;
///
/// assert_eq!(encode(b"Hello", true), "豆米啊拢嘎米多=");
/// assert_eq!(encode(b"Hello", false), "豆米啊拢嘎米多");
/// ```
pub fn encode(data: &[u8], padding: bool) -> String {
    let chars = alphabet_chars();
    // Alphabet characters are three UTF-8 bytes each; pads are one.
    let mut out = String::with_capacity(encoded_len(data.len(), padding) * 3);

    for chunk in data.chunks(3) {
        let b1 = chunk[0];
        let b2 = chunk.get(1).copied().unwrap_or(0);
        let b3 = chunk.get(2).copied().unwrap_or(0);

        out.push(chars[(b1 >> 2) as usize]);
        out.push(chars[(((b1 & 0x03) << 4) | (b2 >> 4)) as usize]);

        if chunk.len() > 1 {
            out.push(chars[(((b2 & 0x0F) << 2) | (b3 >> 6)) as usize]);
        } else if padding {
            out.push(PAD);
        }

        if chunk.len() > 2 {
            out.push(chars[(b3 & 0x3F) as usize]);
        } else if padding {
            out.push(PAD);
        }
    }

    out
}
