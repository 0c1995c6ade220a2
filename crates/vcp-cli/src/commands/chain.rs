//! Chain command implementation.

use crate::input;
use crate::output;
use serde::Serialize;
use vcp_core::{ChainEntry, ChainLink, ChainVerification, ChainVerifier, LinkStatus};

/// JSON report: the verdict plus per-link status.
#[derive(Serialize)]
struct ChainReport {
    #[serde(flatten)]
    verdict: ChainVerification,
    links: Vec<LinkStatus>,
}

pub fn run(
    input: Option<String>,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<ChainEntry> = input::read_json(input.as_deref())
        .map_err(|e| format!("Failed to load chain: {}", e))?;
    let links: Vec<ChainLink> = entries.iter().map(ChainEntry::to_link).collect();

    let verifier = ChainVerifier::new();
    let verdict = verifier.verify(&links);
    let statuses = verifier.link_statuses(&links);

    if json_output {
        let report = ChainReport {
            verdict,
            links: statuses,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_chain_header();
        for status in &statuses {
            println!("{}", output::format_link_row(status));
        }
        println!();
        match verdict.broken_at {
            None => println!("VALID: chain of {} events is intact", links.len()),
            Some(index) => println!(
                "INVALID: chain broken at event index {}: previous hash does not match",
                index
            ),
        }
    }

    if strict && !verdict.is_valid {
        std::process::exit(1);
    }

    Ok(())
}
