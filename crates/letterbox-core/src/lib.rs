//! Core data structures for Letter Boxed puzzles.
//!
//! This crate provides the fundamental types shared by puzzle generation,
//! word validation, and game management.
//!
//! # Overview
//!
//! 1. **Letters** - Which characters a puzzle may use
//!    - [`alphabet`]: The configurable vowel/consonant alphabet
//!    - [`letter_set`]: A deterministically ordered set of distinct letters
//!
//! 2. **Words** - Dictionary and word chains
//!    - [`dictionary`]: Loading, filtering, and caching word lists
//!    - [`word_chain`]: Sequences of words linked last letter to first letter
//!
//! 3. **Board** - The four-sided letter arrangement
//!    - [`board`]: Four sides of three letters each
//!
//! 4. **Fixtures** - Shared test data
//!    - [`testing`]: A small built-in dictionary for tests and benchmarks
//!
//! # Examples
//!
//! ```
//! use letterbox_core::{Alphabet, Board, Dictionary};
//!
//! let alphabet = Alphabet::default();
//! let dictionary = Dictionary::from_words(["crown", "night", "ox"], &alphabet);
//! assert_eq!(dictionary.words(), ["CROWN", "NIGHT"]);
//!
//! let board: Board = "CRO/WNI/GHT/TCR".parse()?;
//! assert!(board.contains('W'));
//! # Ok::<(), letterbox_core::BoardParseError>(())
//! ```

pub mod alphabet;
pub mod board;
pub mod dictionary;
pub mod letter_set;
pub mod testing;
pub mod word_chain;

pub use self::{
    alphabet::Alphabet,
    board::{Board, BoardParseError},
    dictionary::{Dictionary, DictionaryCache, DictionaryError},
    letter_set::LetterSet,
    word_chain::{ChainError, WordChain},
};

/// Minimum number of letters in a playable word.
pub const MIN_WORD_LENGTH: usize = 3;

/// Number of distinct letters a generated chain and board must cover.
pub const REQUIRED_LETTERS_COUNT: usize = 9;

/// Maximum number of words in a generated chain.
pub const MAX_CHAIN_LENGTH: usize = 3;

/// Number of sides on a board.
pub const SIDE_COUNT: usize = 4;

/// Number of letter slots on each side of a board.
pub const SIDE_LENGTH: usize = 3;
