//! Output formatting utilities.

use vcp_canonical::truncate_hash;
use vcp_core::{LinkStatus, VerificationResult, VerificationStep};

/// Characters kept on each side when shortening hashes in tables.
const HASH_DISPLAY_LEN: usize = 8;

/// Prints the header of the Merkle step table.
#[allow(clippy::print_literal)]
pub fn print_steps_header() {
    println!("{:<5} {:<32} {:<40} {}", "STEP", "OPERATION", "INPUT", "OUTPUT");
    println!("{}", "-".repeat(100));
}

/// Formats one verification step as a table row.
pub fn format_step_row(step: &VerificationStep) -> String {
    format!(
        "{:<5} {:<32} {:<40} {}{}",
        step.step,
        step.operation,
        step.input,
        step.output,
        if step.success { "" } else { "  FAILED" }
    )
}

/// One-line verdict for a Merkle proof.
pub fn format_merkle_verdict(result: &VerificationResult) -> String {
    if result.is_valid {
        format!("VALID: computed root matches {}", result.computed_root)
    } else {
        format!(
            "INVALID: {}",
            result.error.as_deref().unwrap_or("verification failed")
        )
    }
}

/// Prints the header of the chain table.
#[allow(clippy::print_literal)]
pub fn print_chain_header() {
    println!("{:<6} {:<20} {:<20} {}", "INDEX", "EVENT_HASH", "PREV_HASH", "STATUS");
    println!("{}", "-".repeat(60));
}

/// Formats one chain link as a table row.
pub fn format_link_row(status: &LinkStatus) -> String {
    let prev = if status.is_genesis {
        "(genesis)".to_string()
    } else {
        truncate_hash(&status.prev_hash, HASH_DISPLAY_LEN)
    };
    let label = if status.is_genesis {
        "genesis"
    } else if status.index == 0 {
        "start"
    } else if status.is_linked {
        "linked"
    } else {
        "BROKEN"
    };
    format!(
        "{:<6} {:<20} {:<20} {}",
        status.index,
        truncate_hash(&status.event_hash, HASH_DISPLAY_LEN),
        prev,
        label
    )
}
