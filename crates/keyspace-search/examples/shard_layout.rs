//! Print how the keyspace is split across workers
//!
//! Usage:
//!   cargo run --example shard_layout -p keyspace-search -- [workers] [length]
//!
//! Shows each shard's boundary and candidate count for the default alphabet,
//! which makes the effect of an uneven split visible.

use keyspace_search::constants::{DEFAULT_LENGTH, DEFAULT_WORKERS};
use keyspace_search::{Alphabet, partition};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let workers = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_WORKERS);
    let length = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LENGTH);

    let alphabet = Alphabet::default();
    let shards = match partition(alphabet, length, workers) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Candidates per leading byte
    let per_leading = alphabet.keyspace_size(length - 1);

    println!(
        "Alphabet [{}, {}] (radix {}), length {}, {} workers",
        alphabet.lower(),
        alphabet.upper(),
        alphabet.radix(),
        length,
        workers
    );
    println!();

    for shard in &shards {
        println!("{}", shard.describe());
        let leading = shard.leading.len() as u128;
        match per_leading.and_then(|n| n.checked_mul(leading)) {
            Some(count) => println!("  {} leading byte(s), {} candidates", leading, count),
            None => println!("  {} leading byte(s)", leading),
        }
    }
}
