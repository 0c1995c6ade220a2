use thiserror::Error;

/// Validation errors for canonical primitives.
///
/// Every variant describes malformed input; none of them describe a failed
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Hex text with an odd number of characters.
    #[error("hex string has odd length {len}")]
    OddLength {
        /// Number of characters in the offending string.
        len: usize,
    },
    /// Hex text containing a character outside `[0-9a-fA-F]`.
    #[error("invalid hex character {ch:?} at position {index}")]
    InvalidCharacter {
        /// Offending character.
        ch: char,
        /// Character position within the input.
        index: usize,
    },
    /// Decoded value has the wrong number of bytes.
    #[error("{field} must be {expected} bytes, got {actual}")]
    WrongLength {
        /// Field name that failed validation.
        field: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a numeric value exceeds its bounds.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
