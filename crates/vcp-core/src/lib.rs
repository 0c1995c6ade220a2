//! Cryptographic verification core for VCP audit evidence.
//!
//! This crate provides:
//! - RFC 6962 domain-separated leaf and node hashing
//! - Merkle inclusion proof verification with a step-by-step trace
//! - Backward hash-chain integrity checking
//! - Serde types for the evidence documents those checks consume
//!
//! Core invariants:
//! - Verification is pure, deterministic and offline
//! - `verify` calls are total: malformed input yields an invalid result, never an error
//! - Only `is_valid` carries the verdict; steps and messages are diagnostic
//!
#![deny(missing_docs)]

/// Hash-chain verification.
pub mod chain;
/// Error types for core operations.
pub mod errors;
/// Evidence documents served by the explorer API.
pub mod events;
/// RFC 6962 hashing primitives.
pub mod merkle;
/// Merkle inclusion proof verification.
pub mod proof;

pub use chain::{ChainLink, ChainVerification, ChainVerifier, LinkStatus};
pub use errors::CoreError;
pub use events::{
    BlockchainAnchor, ChainEntry, MerkleProof, MerkleProofResponse, SignatureAlgorithm,
    VcpSecurity,
};
pub use merkle::{leaf_hash, node_hash, LEAF_HASH_PREFIX, NODE_HASH_PREFIX};
pub use proof::{MerkleVerifier, Position, VerificationResult, VerificationStep, ROOT_MISMATCH};
