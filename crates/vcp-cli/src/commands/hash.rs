//! Hash command implementation.

use vcp_canonical::{hex_to_bytes, sha256_hex};
use vcp_core::leaf_hash;

pub fn run(hex: String, leaf: bool) -> Result<(), Box<dyn std::error::Error>> {
    let digest = if leaf {
        leaf_hash(&hex_to_bytes(&hex)?).to_hex()
    } else {
        sha256_hex(&hex)?
    };
    println!("{}", digest);
    Ok(())
}
