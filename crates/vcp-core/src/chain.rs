//! Hash-chain integrity verification.
//!
//! Each VCP event embeds the hash of its predecessor in `prev_hash`. A chain
//! is intact when every link after the first points at the `event_hash`
//! directly before it. Hashes are compared in canonical (lowercase) form.

use serde::{Deserialize, Serialize};
use vcp_canonical::Digest;

/// One event's position in a hash chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// Hash of this event.
    pub event_hash: String,
    /// Hash of the preceding event, as declared by this event.
    pub prev_hash: String,
}

impl ChainLink {
    /// Creates a link from its two hashes.
    pub fn new(event_hash: impl Into<String>, prev_hash: impl Into<String>) -> Self {
        Self {
            event_hash: event_hash.into(),
            prev_hash: prev_hash.into(),
        }
    }

    /// Returns `true` if `prev_hash` is the all-zero genesis digest.
    pub fn is_genesis(&self) -> bool {
        Digest::from_hex(&self.prev_hash).is_ok_and(|d| d.is_zero())
    }

    /// Returns `true` if this link declares `previous` as its predecessor.
    ///
    /// Hashes are compared case-insensitively, so `ABCD` and `abcd` link.
    /// Exact string comparison would report such a pair as broken.
    pub fn follows(&self, previous: &ChainLink) -> bool {
        self.prev_hash.eq_ignore_ascii_case(&previous.event_hash)
    }
}

/// Outcome of a hash-chain verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainVerification {
    /// `true` if every adjacent pair is linked.
    pub is_valid: bool,
    /// Index of the first link whose `prev_hash` does not match its predecessor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broken_at: Option<usize>,
}

impl ChainVerification {
    fn intact() -> Self {
        Self {
            is_valid: true,
            broken_at: None,
        }
    }

    fn broken_at(index: usize) -> Self {
        Self {
            is_valid: false,
            broken_at: Some(index),
        }
    }
}

/// Display status of one link, independent of the overall verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatus {
    /// Position of the link in the input sequence.
    pub index: usize,
    /// Hash of this event.
    pub event_hash: String,
    /// Declared predecessor hash.
    pub prev_hash: String,
    /// `prev_hash` is the all-zero genesis digest.
    pub is_genesis: bool,
    /// Genesis, or `prev_hash` matches the previous link's `event_hash`.
    pub is_linked: bool,
}

/// Verifies backward-linked hash chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainVerifier;

impl ChainVerifier {
    /// Creates a verifier.
    pub fn new() -> Self {
        ChainVerifier
    }

    /// Checks that each link's `prev_hash` equals the previous link's `event_hash`.
    ///
    /// Stops at the first break. Sequences of length 0 or 1 are valid, and the
    /// first link's `prev_hash` is never inspected.
    ///
    /// ```rust
    /// use vcp_core::{ChainLink, ChainVerifier};
    ///
    /// let links = [ChainLink::new("aa", "00"), ChainLink::new("bb", "aa")];
    /// assert!(ChainVerifier::new().verify(&links).is_valid);
    /// ```
    pub fn verify(&self, links: &[ChainLink]) -> ChainVerification {
        let verdict = links
            .windows(2)
            .position(|pair| !pair[1].follows(&pair[0]))
            .map_or_else(ChainVerification::intact, |i| {
                ChainVerification::broken_at(i + 1)
            });

        tracing::debug!(
            links = links.len(),
            is_valid = verdict.is_valid,
            broken_at = ?verdict.broken_at,
            "verified hash chain"
        );
        verdict
    }

    /// Per-link status for display.
    ///
    /// Unlike [`ChainVerifier::verify`], every link is reported and a genesis
    /// link counts as linked wherever it appears.
    pub fn link_statuses(&self, links: &[ChainLink]) -> Vec<LinkStatus> {
        links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let is_genesis = link.is_genesis();
                let follows_previous = index
                    .checked_sub(1)
                    .is_some_and(|prev| link.follows(&links[prev]));
                LinkStatus {
                    index,
                    event_hash: link.event_hash.clone(),
                    prev_hash: link.prev_hash.clone(),
                    is_genesis,
                    is_linked: is_genesis || follows_previous,
                }
            })
            .collect()
    }
}
