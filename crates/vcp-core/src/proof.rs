//! Merkle inclusion proof verification.
//!
//! Recomputes a root from a leaf, its index and an audit path, and records
//! every hashing operation as a [`VerificationStep`] for display. The
//! verifier is total: malformed input produces an invalid
//! [`VerificationResult`] with an `error` message, never an `Err` or a panic.

use serde::{Deserialize, Serialize};
use vcp_canonical::Digest;

use crate::errors::CoreError;
use crate::merkle::{leaf_hash, node_hash, LEAF_HASH_PREFIX};

/// Error message reported when the recomputed root differs from the expected one.
pub const ROOT_MISMATCH: &str = "Root hash mismatch";

/// Number of hex characters shown in step previews.
const PREVIEW_LEN: usize = 16;

/// One hashing operation performed during verification.
///
/// Steps are an audit trail; the verdict is carried by
/// [`VerificationResult::is_valid`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStep {
    /// 1-based position in the trace.
    pub step: usize,
    /// Operation performed, e.g. `Combine(current || sibling[0])`.
    pub operation: String,
    /// Human-readable description of the inputs.
    pub input: String,
    /// Human-readable description of the output.
    pub output: String,
    /// Whether this step succeeded.
    pub success: bool,
}

/// Outcome of a Merkle inclusion proof verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// `true` only if the recomputed root equals the expected root.
    pub is_valid: bool,
    /// Recomputed root as lowercase hex; empty if verification aborted.
    pub computed_root: String,
    /// Expected root exactly as supplied by the caller.
    pub expected_root: String,
    /// Trace of the hashing operations performed, possibly partial.
    pub steps: Vec<VerificationStep>,
    /// Diagnostic message for invalid results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Position of the current node relative to its sibling at one tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Current node is the left child (even index).
    Left,
    /// Current node is the right child (odd index).
    Right,
}

impl Position {
    /// Position implied by a node index at its level.
    pub fn of_index(index: u64) -> Self {
        if index % 2 == 0 {
            Position::Left
        } else {
            Position::Right
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

/// Verifies RFC 6962 Merkle inclusion proofs.
///
/// The verifier holds no state; one instance can be shared freely across
/// threads.
///
/// # Example
///
/// ```rust
/// use vcp_core::{leaf_hash, node_hash, MerkleVerifier};
/// use vcp_canonical::sha256;
///
/// let event = sha256(b"order sent");
/// let sibling = leaf_hash(sha256(b"order acknowledged").as_bytes());
/// let root = node_hash(&leaf_hash(event.as_bytes()), &sibling);
///
/// let result = MerkleVerifier::new().verify(
///     &event.to_hex(),
///     0,
///     &[sibling.to_hex()],
///     &root.to_hex(),
/// );
/// assert!(result.is_valid);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MerkleVerifier;

impl MerkleVerifier {
    /// Creates a verifier.
    pub fn new() -> Self {
        MerkleVerifier
    }

    /// Verifies that `event_hash` at `leaf_index` is included under `expected_root`.
    ///
    /// `audit_path` lists sibling hashes from the leaf level upward. The
    /// comparison against `expected_root` is case-insensitive. `leaf_index`
    /// is used only for its parity at each level and is not checked against
    /// the tree size.
    pub fn verify<S: AsRef<str>>(
        &self,
        event_hash: &str,
        leaf_index: u64,
        audit_path: &[S],
        expected_root: &str,
    ) -> VerificationResult {
        tracing::debug!(
            leaf_index,
            depth = audit_path.len(),
            "verifying merkle inclusion proof"
        );

        let mut steps = Vec::with_capacity(audit_path.len() + 2);
        let computed = match recompute_root(event_hash, leaf_index, audit_path, &mut steps) {
            Ok(root) => root,
            Err(e) => {
                tracing::debug!(error = %e, "merkle verification aborted");
                return VerificationResult {
                    is_valid: false,
                    computed_root: String::new(),
                    expected_root: expected_root.to_string(),
                    steps,
                    error: Some(e.to_string()),
                };
            }
        };

        let computed_root = computed.to_hex();
        let is_valid = computed_root.eq_ignore_ascii_case(expected_root);
        steps.push(VerificationStep {
            step: steps.len() + 1,
            operation: "Compare with Merkle Root".to_string(),
            input: format!("Computed: {}", preview(&computed_root)),
            output: format!("Expected: {}", preview(expected_root)),
            success: is_valid,
        });

        tracing::debug!(is_valid, computed_root = %computed_root, "merkle verification finished");

        VerificationResult {
            is_valid,
            computed_root,
            expected_root: expected_root.to_string(),
            steps,
            error: (!is_valid).then(|| ROOT_MISMATCH.to_string()),
        }
    }
}

/// Walks the audit path from the leaf to the root, appending a step per hash.
fn recompute_root<S: AsRef<str>>(
    event_hash: &str,
    leaf_index: u64,
    audit_path: &[S],
    steps: &mut Vec<VerificationStep>,
) -> Result<Digest, CoreError> {
    let event = Digest::from_hex(event_hash)?;
    let mut current = leaf_hash(event.as_bytes());
    steps.push(VerificationStep {
        step: 1,
        operation: "Compute Leaf Hash".to_string(),
        input: format!("0x{:02x} || {}", LEAF_HASH_PREFIX, preview(event_hash)),
        output: preview(&current.to_hex()),
        success: true,
    });

    let mut index = leaf_index;
    for (level, entry) in audit_path.iter().enumerate() {
        let sibling = Digest::from_hex(entry.as_ref())
            .map_err(|source| CoreError::InvalidPathEntry { index: level, source })?;

        let position = Position::of_index(index);
        let (combined, operation) = match position {
            Position::Left => (
                node_hash(&current, &sibling),
                format!("Combine(current || sibling[{level}])"),
            ),
            Position::Right => (
                node_hash(&sibling, &current),
                format!("Combine(sibling[{level}] || current)"),
            ),
        };

        tracing::trace!(
            tree_level = level,
            index,
            position = position.as_str(),
            "combined audit path entry"
        );
        steps.push(VerificationStep {
            step: level + 2,
            operation,
            input: format!("Level {level}: index={index}, position={}", position.as_str()),
            output: preview(&combined.to_hex()),
            success: true,
        });

        current = combined;
        index /= 2;
    }

    Ok(current)
}

/// First [`PREVIEW_LEN`] characters of a hex string followed by `...`.
fn preview(hex: &str) -> String {
    let head: String = hex.chars().take(PREVIEW_LEN).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcp_canonical::sha256;

    #[test]
    fn position_follows_parity() {
        assert_eq!(Position::of_index(0), Position::Left);
        assert_eq!(Position::of_index(1), Position::Right);
        assert_eq!(Position::of_index(u64::MAX), Position::Right);
    }

    #[test]
    fn preview_handles_short_and_non_ascii_input() {
        assert_eq!(preview("abcd"), "abcd...");
        let accented = "é".repeat(17);
        assert_eq!(preview(&accented), format!("{}...", "é".repeat(16)));
    }

    #[test]
    fn single_leaf_trace_has_two_steps() {
        let event = sha256(b"heartbeat");
        let root = leaf_hash(event.as_bytes());
        let result = MerkleVerifier::new().verify::<&str>(&event.to_hex(), 0, &[], &root.to_hex());

        assert!(result.is_valid);
        assert_eq!(result.error, None);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].operation, "Compute Leaf Hash");
        assert_eq!(result.steps[0].input, format!("0x00 || {}...", &event.to_hex()[..16]));
        assert_eq!(result.steps[1].operation, "Compare with Merkle Root");
        assert!(result.steps[1].success);
    }

    #[test]
    fn malformed_path_entry_keeps_partial_trace() {
        let event = sha256(b"order");
        let good = sha256(b"sibling").to_hex();
        let result = MerkleVerifier::new().verify(
            &event.to_hex(),
            3,
            &[good.as_str(), "zz"],
            &good,
        );

        assert!(!result.is_valid);
        assert_eq!(result.computed_root, "");
        assert_eq!(result.expected_root, good);
        // leaf hash plus the first combination
        assert_eq!(result.steps.len(), 2);
        let error = result.error.unwrap();
        assert!(error.contains("audit path entry 1"), "{error}");
    }
}
