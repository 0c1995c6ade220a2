//! Strict hexadecimal codec.
//!
//! Decoding rejects odd-length input and any character outside
//! `[0-9a-fA-F]`; nothing is silently truncated. Encoding always produces
//! lowercase output, so `bytes_to_hex(&hex_to_bytes(s)?)` is the lowercase
//! form of `s`.

use crate::validation::ValidationError;

/// Decodes a hexadecimal string into bytes, most-significant nibble first.
///
/// # Example
///
/// ```rust
/// use vcp_canonical::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("00ffA0")?, vec![0x00, 0xff, 0xa0]);
/// assert!(hex_to_bytes("abc").is_err());
/// # Ok::<(), vcp_canonical::ValidationError>(())
/// ```
///
/// # Errors
///
/// Returns [`ValidationError::OddLength`] or
/// [`ValidationError::InvalidCharacter`] for malformed input.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, ValidationError> {
    ::hex::decode(hex).map_err(|e| match e {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            ValidationError::InvalidCharacter { ch: c, index }
        }
        ::hex::FromHexError::OddLength | ::hex::FromHexError::InvalidStringLength => {
            ValidationError::OddLength { len: hex.len() }
        }
    })
}

/// Encodes bytes as lowercase hexadecimal, two characters per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}
