//! Example demonstrating Letter Boxed puzzle generation.
//!
//! This example shows how to:
//! - Load a dictionary (or fall back to the built-in sample)
//! - Generate a puzzle from a random, hex, or phrase seed
//! - Sample many puzzles in parallel and summarize the chains found
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Use a word list and a reproducible seed phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --dictionary words.txt --phrase 2026-10-19
//! ```
//!
//! Sample many puzzles and report chain length statistics:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --samples 10000
//! ```

use std::{path::PathBuf, process};

use clap::Parser;
use letterbox_core::{Alphabet, Dictionary, MAX_CHAIN_LENGTH, testing};
use letterbox_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Word list, one word per line. Defaults to the built-in sample.
    #[arg(long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Seed as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of random puzzles to sample for statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let dictionary = match &args.dictionary {
        Some(path) => Dictionary::load(path, &Alphabet::default()).unwrap_or_else(|err| {
            eprintln!("{err}");
            process::exit(1);
        }),
        None => testing::sample_dictionary(),
    };
    let generator = PuzzleGenerator::new(&dictionary);

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_statistics(&generator, samples);
        return;
    }

    let seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(PuzzleSeed::from_phrase))
        .unwrap_or_else(PuzzleSeed::random);
    match generator.generate_with_seed(seed) {
        Ok(puzzle) => print_puzzle(&puzzle),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_statistics(generator: &PuzzleGenerator<'_>, samples: usize) {
    let lengths = (0..samples)
        .into_par_iter()
        .map(|_| generator.generate().map(|puzzle| puzzle.chain.len()))
        .collect::<Vec<_>>();

    let mut histogram = [0_usize; MAX_CHAIN_LENGTH + 1];
    let mut failures = 0_usize;
    for length in lengths {
        match length {
            Ok(len) => histogram[len] += 1,
            Err(_) => failures += 1,
        }
    }

    println!("Samples: {samples}");
    for (len, count) in histogram.iter().enumerate().skip(1) {
        println!("  {len}-word chains: {count}");
    }
    println!("  failures: {failures}");
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Board:");
    for side in puzzle.board.sides() {
        let side: String = side.iter().collect();
        println!("  {side}");
    }
    println!();
    println!("Solution:");
    println!("  {}", puzzle.chain);
}
