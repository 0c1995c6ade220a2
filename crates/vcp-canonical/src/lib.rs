//! Canonical primitives for VCP audit evidence.
//!
//! Hex encoding, SHA-256 digests and event identifiers live here. Every
//! value that participates in Merkle or hash-chain verification is parsed
//! through this crate, which rejects malformed input instead of truncating it.
//!
#![deny(missing_docs)]

/// Formatting helpers for hashes and timestamps.
pub mod display;
/// SHA-256 digest newtype and plain hashing helpers.
pub mod digest;
/// Strict hexadecimal codec.
pub mod encoding;
/// UUID v7 identifier newtypes.
pub mod identifiers;
/// Validation errors for malformed input.
pub mod validation;

pub use digest::{is_valid_hash, sha256, sha256_hex, Digest, DIGEST_LEN};
pub use display::{format_nanosecond_timestamp, truncate_hash};
pub use encoding::{bytes_to_hex, hex_to_bytes};
pub use identifiers::{EventId, TraceId};
pub use validation::ValidationError;
