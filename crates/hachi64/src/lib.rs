//! Hachi64 encoding and decoding.
//!
//! Hachi64 is a base64-style binary-to-text codec that maps every 6-bit
//! group to one of 64 Chinese characters instead of the ASCII base64
//! alphabet. The group math is identical to base64: three bytes become
//! four characters, and partial trailing groups are optionally padded
//! with `=` up to a multiple of four.
//!
//! # Example
//!
//! ```
//! use hachi64::{decode, encode};
//!
//! let encoded = encode(b"Hello", true);
//! assert_eq!(encoded, "豆米啊拢嘎米多=");
//! let decoded = decode(&encoded, true).unwrap();
//! assert_eq!(decoded, b"Hello");
//! ```

use thiserror::Error;

mod constants;
mod decode;
mod encode;
mod encoded_len;
mod tables;

pub use constants::{ALPHABET, PAD};
pub use decode::decode;
pub use encode::encode;
pub use encoded_len::encoded_len;

/// Error type for Hachi64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Hachi64Error {
    /// The input contains a character outside the alphabet, or a pad
    /// character somewhere other than the end of the input.
    #[error("invalid character in input: '{0}'")]
    InvalidCharacter(char),
}
