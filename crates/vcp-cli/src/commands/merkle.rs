//! Merkle command implementation.

use crate::input;
use crate::output;
use vcp_core::{MerkleProofResponse, MerkleVerifier};

pub fn run(
    input: Option<String>,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let response: MerkleProofResponse = input::read_json(input.as_deref())
        .map_err(|e| format!("Failed to load Merkle proof: {}", e))?;

    if !response.event_id.is_valid() {
        tracing::warn!(event_id = %response.event_id, "event_id is not a UUID v7");
    }

    let verifier = MerkleVerifier::new();
    let result = response.verify(&verifier);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Event:      {}", response.event_id);
        println!("Leaf index: {}", response.merkle_proof.leaf_index);
        println!("Root:       {}", response.merkle_proof.root_hash);
        println!();
        output::print_steps_header();
        for step in &result.steps {
            println!("{}", output::format_step_row(step));
        }
        println!();
        println!("{}", output::format_merkle_verdict(&result));
    }

    if strict && !result.is_valid {
        std::process::exit(1);
    }

    Ok(())
}
