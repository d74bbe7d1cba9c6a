//! Solvable Letter Boxed puzzle generation.
//!
//! Generation works backwards from a solution: first a random word chain
//! covering exactly nine distinct letters is found, then those letters are
//! laid out on the board. The board is therefore always solvable by that
//! chain.
//!
//! # Components
//!
//! - [`WordIndex`]: dictionary words grouped by first letter
//! - [`ChainFinder`]: randomized, restart-on-failure chain search
//! - [`build_board`]: lays nine letters out on four sides
//! - [`PuzzleGenerator`]: bounded retries around the search, driven by a
//!   [`PuzzleSeed`]
//!
//! All randomness flows from an explicit random source, so a seed fully
//! determines the puzzle for a given dictionary and configuration.
//!
//! # Examples
//!
//! ```
//! use letterbox_core::testing;
//! use letterbox_generator::PuzzleGenerator;
//!
//! let dictionary = testing::sample_dictionary();
//! let puzzle = PuzzleGenerator::new(&dictionary).generate()?;
//!
//! println!("board: {}", puzzle.board);
//! println!("solution: {}", puzzle.chain);
//! println!("seed: {}", puzzle.seed);
//! # Ok::<(), letterbox_generator::GenerateError>(())
//! ```

pub use self::{
    board_builder::{BoardBuildError, build_board},
    chain_finder::{ChainFinder, ChainMatch, DEFAULT_MAX_ATTEMPTS, find_chain},
    generator::{
        DEFAULT_MAX_ROUNDS, GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator,
    },
    seed::{PuzzleSeed, SeedParseError},
    word_index::WordIndex,
};

mod board_builder;
mod chain_finder;
mod generator;
mod seed;
mod word_index;
