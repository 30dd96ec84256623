//! Corpus generator binary.
//!
//! Writes one randomly filled matrix pair per size to the output file, in
//! the one-matrix-per-line text encoding the benchmark harness reads.

use std::env;
use std::path::Path;
use std::process;

use mb_gen::{write_corpus, MatrixGenerator, DEFAULT_SIZES};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <output.txt> [size...]", args[0]);
        process::exit(2);
    }

    let sizes: Vec<usize> = if args.len() > 2 {
        match args[2..]
            .iter()
            .map(|s| s.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(sizes) => sizes,
            Err(e) => {
                eprintln!("error: invalid size: {}", e);
                process::exit(2);
            }
        }
    } else {
        DEFAULT_SIZES.to_vec()
    };

    if sizes.iter().any(|&n| n == 0) {
        eprintln!("error: matrix size must be at least 1");
        process::exit(2);
    }

    let path = Path::new(&args[1]);
    let mut gen = MatrixGenerator::from_entropy();
    if let Err(e) = write_corpus(path, &sizes, &mut gen) {
        eprintln!("error: could not write {}: {}", path.display(), e);
        process::exit(1);
    }

    println!("{} generated successfully.", path.display());
}
