//! VCP CLI - Command-line interface for Merkle proof and hash chain verification.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod logging;
mod output;

use commands::{chain, hash, merkle};

#[derive(Parser)]
#[command(name = "vcp")]
#[command(about = "VCP audit evidence verification CLI")]
struct Cli {
    /// Log filter directive (e.g. `debug`, `vcp_core=trace`)
    #[arg(long, global = true, env = "VCP_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a Merkle inclusion proof
    Merkle {
        /// Merkle proof response JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if the proof does not verify
        #[arg(long)]
        strict: bool,
    },
    /// Verify hash chain linkage across a sequence of events
    Chain {
        /// JSON array of events or {event_hash, prev_hash} links (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if the chain is broken
        #[arg(long)]
        strict: bool,
    },
    /// Hash hex-encoded data with SHA-256
    Hash {
        /// Hex-encoded input bytes
        hex: String,
        /// Apply the RFC 6962 leaf prefix (0x00) before hashing
        #[arg(long)]
        leaf: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let result = match cli.command {
        Commands::Merkle {
            input,
            json,
            strict,
        } => merkle::run(input, json, strict),
        Commands::Chain {
            input,
            json,
            strict,
        } => chain::run(input, json, strict),
        Commands::Hash { hex, leaf } => hash::run(hex, leaf),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
