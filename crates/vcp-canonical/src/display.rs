//! Formatting helpers for presenting hashes and VCP timestamps.

use chrono::{DateTime, SecondsFormat};

use crate::validation::ValidationError;

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Shortens a hash to `first n ... last n` characters.
///
/// Hashes of `2 * n` characters or fewer are returned unchanged.
///
/// ```rust
/// use vcp_canonical::truncate_hash;
///
/// assert_eq!(truncate_hash("0123456789abcdef0123", 4), "0123...0123");
/// assert_eq!(truncate_hash("abcd", 4), "abcd");
/// ```
pub fn truncate_hash(hash: &str, n: usize) -> String {
    let count = hash.chars().count();
    if count <= n * 2 {
        return hash.to_string();
    }
    let head: String = hash.chars().take(n).collect();
    let tail: String = hash.chars().skip(count - n).collect();
    format!("{head}...{tail}")
}

/// Formats a nanosecond epoch string as an RFC 3339 UTC timestamp with
/// millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
///
/// Sub-millisecond digits are truncated toward zero.
///
/// # Errors
///
/// Returns [`ValidationError::PatternMismatch`] if `ns` is not a decimal
/// integer and [`ValidationError::OutOfBounds`] if it lies outside the range
/// `chrono` can represent.
pub fn format_nanosecond_timestamp(ns: &str) -> Result<String, ValidationError> {
    let nanos: i128 = ns
        .trim()
        .parse()
        .map_err(|_| ValidationError::PatternMismatch {
            field: "timestamp_int",
            value: ns.to_string(),
        })?;
    let out_of_bounds = || ValidationError::OutOfBounds {
        field: "timestamp_int",
        value: ns.to_string(),
    };
    let millis = i64::try_from(nanos / NANOS_PER_MILLI).map_err(|_| out_of_bounds())?;
    let datetime = DateTime::from_timestamp_millis(millis).ok_or_else(out_of_bounds)?;
    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}
