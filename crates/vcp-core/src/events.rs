use serde::{Deserialize, Serialize};
use vcp_canonical::EventId;

use crate::chain::ChainLink;
use crate::proof::{MerkleVerifier, VerificationResult};

/// Signature algorithm used to sign an event hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignatureAlgorithm {
    /// Ed25519.
    Ed25519,
    /// ECDSA over NIST P-256.
    EcdsaP256,
}

/// Public blockchain transaction anchoring a Merkle root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainAnchor {
    /// Network name (e.g., "ethereum").
    pub network: String,
    /// Anchoring transaction hash.
    pub tx_hash: String,
    /// Block containing the transaction.
    pub block_number: u64,
    /// RFC 3339 time of anchoring.
    pub anchored_at: String,
}

/// Security block of a VCP event (VCP-SEC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcpSecurity {
    /// SHA-256 of the event, 64 hex characters.
    pub event_hash: String,
    /// `event_hash` of the preceding event; all zeros for genesis.
    pub prev_hash: String,
    /// Optional base64 signature over `event_hash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Optional signature algorithm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_algo: Option<SignatureAlgorithm>,
    /// Optional Merkle root the event was batched under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merkle_root: Option<String>,
    /// Optional on-chain anchor of that root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<BlockchainAnchor>,
}

impl From<&VcpSecurity> for ChainLink {
    fn from(security: &VcpSecurity) -> Self {
        ChainLink::new(security.event_hash.clone(), security.prev_hash.clone())
    }
}

/// Inclusion proof for one leaf of a published Merkle tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Published root, 64 hex characters.
    pub root_hash: String,
    /// Zero-based leaf position.
    pub leaf_index: u64,
    /// Sibling hashes from the leaf level upward.
    pub audit_path: Vec<String>,
}

/// Merkle proof for an event, as served by the explorer API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProofResponse {
    /// Event the proof belongs to.
    pub event_id: EventId,
    /// Hash of the event (the leaf data).
    pub event_hash: String,
    /// Inclusion proof.
    pub merkle_proof: MerkleProof,
    /// Optional server-side description of the verification steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_steps: Option<Vec<String>>,
}

impl MerkleProofResponse {
    /// Verifies the proof against its own `root_hash`.
    pub fn verify(&self, verifier: &MerkleVerifier) -> VerificationResult {
        verifier.verify(
            &self.event_hash,
            self.merkle_proof.leaf_index,
            &self.merkle_proof.audit_path,
            &self.merkle_proof.root_hash,
        )
    }
}

/// Element of a chain document: a bare link or a full event with a security block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainEntry {
    /// `{ "event_hash": ..., "prev_hash": ... }`
    Link(ChainLink),
    /// `{ "security": { "event_hash": ..., "prev_hash": ... }, ... }`
    Event {
        /// Security block carrying the hashes.
        security: VcpSecurity,
    },
}

impl ChainEntry {
    /// Reduces the entry to its chain link.
    pub fn to_link(&self) -> ChainLink {
        match self {
            ChainEntry::Link(link) => link.clone(),
            ChainEntry::Event { security } => ChainLink::from(security),
        }
    }
}
