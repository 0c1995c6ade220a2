use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::encoding::{bytes_to_hex, hex_to_bytes};
use crate::validation::ValidationError;

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

static DIGEST_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{64}$").expect("invalid regex"));

/// SHA-256 digest, written as 64 lowercase hex characters.
///
/// Parsing accepts either case; display and serialization always use the
/// canonical lowercase form, so two digests compare equal exactly when their
/// canonical strings do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// All-zero digest; the conventional `prev_hash` of a genesis event.
    pub const ZERO: Digest = Digest([0u8; DIGEST_LEN]);

    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    /// Constructs a digest from a byte slice that must be exactly 32 bytes long.
    pub fn from_slice(field: &'static str, bytes: &[u8]) -> Result<Self, ValidationError> {
        let array: [u8; DIGEST_LEN] =
            bytes.try_into().map_err(|_| ValidationError::WrongLength {
                field,
                expected: DIGEST_LEN,
                actual: bytes.len(),
            })?;
        Ok(Digest(array))
    }

    /// Parses a 64-character hex digest (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OddLength`] or
    /// [`ValidationError::InvalidCharacter`] if `hex` does not decode, and
    /// [`ValidationError::WrongLength`] if it decodes to anything but 32 bytes.
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        Self::from_slice("digest", &hex_to_bytes(hex)?)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Returns `true` for the all-zero genesis digest.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Digest {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Digest> for String {
    fn from(value: Digest) -> Self {
        value.to_hex()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Plain SHA-256 of `data`, without any domain separation prefix.
pub fn sha256(data: &[u8]) -> Digest {
    Digest(Sha256::digest(data).into())
}

/// SHA-256 of hex-encoded data, returned as lowercase hex.
pub fn sha256_hex(hex: &str) -> Result<String, ValidationError> {
    Ok(sha256(&hex_to_bytes(hex)?).to_hex())
}

/// Returns `true` if `s` is a 64-character hex digest (either case).
pub fn is_valid_hash(s: &str) -> bool {
    DIGEST_HEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-256("abc")
    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn parses_uppercase_and_canonicalizes() {
        let digest = Digest::from_hex(&ABC.to_uppercase()).unwrap();
        assert_eq!(digest.to_hex(), ABC);
        assert_eq!(digest, Digest::from_hex(ABC).unwrap());
    }

    #[test]
    fn rejects_short_and_long_hex() {
        assert_eq!(
            Digest::from_hex(&ABC[..62]).unwrap_err(),
            ValidationError::WrongLength {
                field: "digest",
                expected: 32,
                actual: 31
            }
        );
        assert!(matches!(
            Digest::from_hex(&format!("{ABC}00")),
            Err(ValidationError::WrongLength { actual: 33, .. })
        ));
        assert_eq!(
            Digest::from_hex(&ABC[..63]).unwrap_err(),
            ValidationError::OddLength { len: 63 }
        );
    }

    #[test]
    fn rejects_non_hex() {
        let bad = format!("{}zz", &ABC[..62]);
        assert_eq!(
            Digest::from_hex(&bad).unwrap_err(),
            ValidationError::InvalidCharacter { ch: 'z', index: 62 }
        );
        assert!(!is_valid_hash(&bad));
    }

    #[test]
    fn from_slice_checks_length() {
        assert_eq!(
            Digest::from_slice("leaf", &[0u8; 31]).unwrap_err(),
            ValidationError::WrongLength {
                field: "leaf",
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn sha256_known_vector() {
        assert_eq!(sha256(b"abc").to_hex(), ABC);
        assert_eq!(sha256_hex("616263").unwrap(), ABC);
    }

    #[test]
    fn zero_digest() {
        assert!(Digest::ZERO.is_zero());
        assert_eq!(Digest::ZERO.to_hex(), "0".repeat(64));
        assert!(!sha256(b"").is_zero());
    }

    #[test]
    fn is_valid_hash_accepts_either_case() {
        assert!(is_valid_hash(ABC));
        assert!(is_valid_hash(&ABC.to_uppercase()));
        assert!(!is_valid_hash("abc"));
        assert!(!is_valid_hash(""));
    }
}
