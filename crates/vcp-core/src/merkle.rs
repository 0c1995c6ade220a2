//! RFC 6962 Merkle tree hashing.
//!
//! Leaves and interior nodes are hashed with distinct one-byte prefixes so a
//! leaf can never be mistaken for a node:
//! - `leaf_hash(data) = SHA-256(0x00 || data)`
//! - `node_hash(left, right) = SHA-256(0x01 || left || right)`

use sha2::{Digest as Sha2Digest, Sha256};
use vcp_canonical::Digest;

/// Prefix for leaf nodes in an RFC 6962 Merkle tree.
pub const LEAF_HASH_PREFIX: u8 = 0x00;

/// Prefix for interior nodes in an RFC 6962 Merkle tree.
pub const NODE_HASH_PREFIX: u8 = 0x01;

/// Hashes raw leaf data.
///
/// Returns: `SHA-256(0x00 || data)`
pub fn leaf_hash(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_HASH_PREFIX]);
    hasher.update(data);
    Digest::from_bytes(hasher.finalize().into())
}

/// Hashes two child nodes into their parent, left before right.
///
/// Returns: `SHA-256(0x01 || left || right)`
pub fn node_hash(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([NODE_HASH_PREFIX]);
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Digest::from_bytes(hasher.finalize().into())
}
