//! Encoded output length calculation.

/// Returns the number of characters `encode` produces for `len` input bytes.
///
/// # Arguments
///
/// * `len` - The number of input bytes.
/// * `padding` - Whether the output is padded to a multiple of four characters.
///
/// # Returns
///
/// The encoded length in characters (not UTF-8 bytes; each alphabet
/// character occupies three bytes in UTF-8).
///
/// # Example
///
/// ```
/// use hachi64::encoded_len;
///
/// assert_eq!(encoded_len(5, true), 8);
/// assert_eq!(encoded_len(5, false), 7);
/// ```
pub fn encoded_len(len: usize, padding: bool) -> usize {
    if padding {
        len.div_ceil(3) * 4
    } else {
        let full_groups = len / 3;
        let remainder = len % 3;
        full_groups * 4 + if remainder == 0 { 0 } else { remainder + 1 }
    }
}
