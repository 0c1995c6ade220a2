use vcp_canonical::{sha256, truncate_hash, Digest};

fn main() {
    let Some(input) = std::env::args().nth(1) else {
        eprintln!("usage: digest <64-hex-digest | text>");
        std::process::exit(2);
    };

    let digest = match Digest::from_hex(&input) {
        Ok(digest) => digest,
        Err(_) => sha256(input.as_bytes()),
    };

    println!("{}", digest);
    println!("{}", truncate_hash(&digest.to_hex(), 8));
}
