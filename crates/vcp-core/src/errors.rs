use thiserror::Error;
use vcp_canonical::ValidationError;

/// Core error types.
///
/// These never cross a `verify` boundary; the verifiers fold them into the
/// `error` field of their result objects.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An input value was not well-formed hex or not a 32-byte digest.
    #[error("malformed input: {0}")]
    Malformed(#[from] ValidationError),
    /// An audit path entry could not be decoded.
    #[error("malformed audit path entry {index}: {source}")]
    InvalidPathEntry {
        /// Position of the entry within the audit path.
        index: usize,
        /// Underlying validation failure.
        source: ValidationError,
    },
}
