use std::time::{Duration, Instant};

use letterbox_core::{Board, Dictionary, REQUIRED_LETTERS_COUNT, WordChain};
use serde::Serialize;

use crate::{BoardBuildError, ChainFinder, DEFAULT_MAX_ATTEMPTS, PuzzleSeed, build_board};

/// Default number of chain searches before generation gives up.
pub const DEFAULT_MAX_ROUNDS: usize = 1000;

/// Limits for puzzle generation.
///
/// Generation runs up to `max_rounds` chain searches of `max_attempts`
/// attempts each. When `time_limit` is set, it also stops once that much
/// time has elapsed after a failed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Attempts per chain search.
    pub max_attempts: usize,
    /// Chain searches before giving up.
    pub max_rounds: usize,
    /// Optional wall-clock limit.
    pub time_limit: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_rounds: DEFAULT_MAX_ROUNDS,
            time_limit: None,
        }
    }
}

/// A generated puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPuzzle {
    /// The board presented to the player.
    pub board: Board,
    /// The word chain the board was built from.
    ///
    /// It proves the board is solvable and is meant for display and logging.
    pub chain: WordChain,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Errors that can occur during puzzle generation.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// The dictionary has no words to start a chain from.
    #[display("dictionary has no usable words")]
    EmptyDictionary,
    /// No suitable word chain was found within the configured limits.
    #[display(
        "no word chain with {REQUIRED_LETTERS_COUNT} distinct letters found after {rounds} rounds ({attempts} attempts)"
    )]
    Exhausted {
        /// Chain searches performed.
        rounds: usize,
        /// Total attempts across all searches.
        attempts: usize,
    },
    /// The board could not be laid out.
    #[display("failed to build board: {_0}")]
    Board(#[from] BoardBuildError),
}

/// Generates solvable Letter Boxed puzzles from a dictionary.
///
/// Each puzzle is built from a word chain found by [`ChainFinder`], so at
/// least one solution of one to three words is known to exist. Generation is
/// bounded by [`GeneratorConfig`] and reports [`GenerateError::Exhausted`]
/// rather than looping forever on a dictionary without suitable chains.
///
/// # Examples
///
/// ```
/// use letterbox_core::testing;
/// use letterbox_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let dictionary = testing::sample_dictionary();
/// let generator = PuzzleGenerator::new(&dictionary);
///
/// let seed = PuzzleSeed::from_phrase("example");
/// let puzzle = generator.generate_with_seed(seed)?;
/// assert_eq!(puzzle.board.letters(), puzzle.chain.letters());
///
/// // The same seed reproduces the same puzzle
/// assert_eq!(generator.generate_with_seed(seed)?, puzzle);
/// # Ok::<(), letterbox_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator<'a> {
    finder: ChainFinder<'a>,
    dictionary: &'a Dictionary,
    config: GeneratorConfig,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            finder: ChainFinder::new(dictionary),
            dictionary,
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the generation limits.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the generation limits.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`generate_with_seed`](Self::generate_with_seed).
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyDictionary`] if the dictionary is empty
    /// and [`GenerateError::Exhausted`] if no chain was found within the
    /// configured rounds or time limit.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        if self.dictionary.is_empty() {
            return Err(GenerateError::EmptyDictionary);
        }

        let GeneratorConfig {
            max_attempts,
            max_rounds,
            time_limit,
        } = self.config;
        let started = Instant::now();
        let mut rng = seed.rng();

        for round in 1..=max_rounds {
            if let Some(found) = self.finder.find(&mut rng, max_attempts) {
                log::info!(
                    "word chain used: {} (round {round}, attempt {})",
                    found.chain,
                    found.attempts
                );
                let board = build_board(&found.letters, &mut rng)?;
                log::info!("generated board: {board}");
                return Ok(GeneratedPuzzle {
                    board,
                    chain: found.chain,
                    seed,
                });
            }

            log::debug!("round {round}: no chain in {max_attempts} attempts, trying again");
            if let Some(limit) = time_limit
                && started.elapsed() >= limit
            {
                return Err(exhausted(round, max_attempts));
            }
        }

        Err(exhausted(max_rounds, max_attempts))
    }
}

fn exhausted(rounds: usize, max_attempts: usize) -> GenerateError {
    let attempts = rounds.saturating_mul(max_attempts);
    log::warn!("giving up on puzzle generation after {rounds} rounds ({attempts} attempts)");
    GenerateError::Exhausted { rounds, attempts }
}

#[cfg(test)]
mod tests {
    use letterbox_core::{Alphabet, testing};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_generate_from_sample_dictionary() {
        let dictionary = testing::sample_dictionary();
        let generator = PuzzleGenerator::new(&dictionary);
        let puzzle = generator.generate().expect("sample dictionary has chains");

        assert_eq!(puzzle.board.letters().len(), REQUIRED_LETTERS_COUNT);
        assert_eq!(puzzle.board.letters(), puzzle.chain.letters());
        for word in puzzle.chain.words() {
            assert!(dictionary.contains(word));
        }
    }

    #[test]
    fn test_single_chain_dictionary() {
        let dictionary = Dictionary::from_words(["crown", "night"], &Alphabet::default());
        let generator = PuzzleGenerator::new(&dictionary);
        let puzzle = generator
            .generate_with_seed(PuzzleSeed::from_phrase("single"))
            .expect("CROWN → NIGHT is reachable");
        assert_eq!(puzzle.chain.words(), ["CROWN", "NIGHT"]);
        assert_eq!(puzzle.board.letters().to_string(), "CGHINORTW");
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let dictionary = testing::sample_dictionary();
        let generator = PuzzleGenerator::new(&dictionary);
        let seed = PuzzleSeed::from_phrase("reproducible");
        let a = generator.generate_with_seed(seed).expect("generates");
        let b = generator.generate_with_seed(seed).expect("generates");
        assert_eq!(a, b);
        assert_eq!(a.seed, seed);
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::default();
        let generator = PuzzleGenerator::new(&dictionary);
        assert_eq!(generator.generate(), Err(GenerateError::EmptyDictionary));
    }

    #[test]
    fn test_exhausted_after_max_rounds() {
        let dictionary = Dictionary::from_words(["cat", "tea"], &Alphabet::default());
        let generator = PuzzleGenerator::new(&dictionary).with_config(GeneratorConfig {
            max_attempts: 5,
            max_rounds: 3,
            time_limit: None,
        });
        assert_eq!(
            generator.generate(),
            Err(GenerateError::Exhausted {
                rounds: 3,
                attempts: 15
            })
        );
    }

    #[test]
    fn test_exhausted_by_time_limit() {
        let dictionary = Dictionary::from_words(["cat"], &Alphabet::default());
        let generator = PuzzleGenerator::new(&dictionary).with_config(GeneratorConfig {
            max_attempts: 2,
            max_rounds: usize::MAX,
            time_limit: Some(Duration::ZERO),
        });
        assert_eq!(
            generator.generate(),
            Err(GenerateError::Exhausted {
                rounds: 1,
                attempts: 2
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GenerateError::Exhausted {
                rounds: 2,
                attempts: 200
            }
            .to_string(),
            "no word chain with 9 distinct letters found after 2 rounds (200 attempts)"
        );
        let err = GenerateError::from(BoardBuildError::LetterCount { count: 3 });
        assert_eq!(
            err.to_string(),
            "failed to build board: board needs exactly 9 distinct letters, got 3"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_generated_puzzles_are_solvable(bytes in any::<[u8; 32]>()) {
            let dictionary = testing::sample_dictionary();
            let generator = PuzzleGenerator::new(&dictionary);
            let seed = PuzzleSeed::from_bytes(bytes);
            let puzzle = generator.generate_with_seed(seed).unwrap();

            let sides = puzzle.board.sides();
            prop_assert_eq!(sides[3], [sides[2][2], sides[0][0], sides[0][1]]);
            prop_assert_eq!(puzzle.board.letters(), puzzle.chain.letters());
            prop_assert!((1..=3).contains(&puzzle.chain.len()));
            prop_assert_eq!(puzzle.seed, seed);
        }
    }
}
