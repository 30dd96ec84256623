//! Benchmark harness binary.
//!
//! Reads matrix pairs from a corpus file and times the selected
//! multiplication strategy on each pair. With no tile size the naive triple
//! loop runs; with one, the cache-blocked variant runs.

use std::env;
use std::path::Path;
use std::process;

use mb_bench::{run_file, BenchConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("usage: {} <input.txt> [tile-size]", args[0]);
        eprintln!("where input.txt holds one matrix per line: \"n,v0,v1,...\"");
        process::exit(2);
    }

    let tile_size = match args.get(2) {
        Some(token) => match token.parse::<usize>() {
            Ok(tile) => Some(tile),
            Err(e) => {
                eprintln!("error: invalid tile size {:?}: {}", token, e);
                process::exit(2);
            }
        },
        None => None,
    };

    let config = BenchConfig {
        tile_size,
        ..BenchConfig::default()
    };

    let path = Path::new(&args[1]);
    match run_file(path, &config) {
        Ok(results) => {
            for result in &results {
                println!("{}", result);
            }
            if results.is_empty() {
                eprintln!("error: no pair completed");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
