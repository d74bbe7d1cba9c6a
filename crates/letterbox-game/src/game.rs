use letterbox_core::{Board, Dictionary, LetterSet, WordChain};
use letterbox_generator::{GeneratedPuzzle, PuzzleSeed};
use serde::Serialize;

use crate::{ValidationResult, validate_word};

/// One player's progress on a generated puzzle.
///
/// Accepted words are recorded in order; each must start with the last letter
/// of the one before it. The puzzle is solved once every board letter has been
/// used by some accepted word.
///
/// # Examples
///
/// ```
/// use letterbox_core::{Alphabet, Dictionary};
/// use letterbox_game::Game;
/// use letterbox_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let dictionary = Dictionary::from_words(["crown", "night"], &Alphabet::default());
/// let puzzle = PuzzleGenerator::new(&dictionary).generate_with_seed(PuzzleSeed::from_phrase("doc"))?;
///
/// let mut game = Game::new(puzzle);
/// assert!(game.submit("crown", &dictionary).valid);
/// assert_eq!(game.last_letter(), Some('N'));
/// assert!(!game.is_solved());
///
/// assert!(game.submit("night", &dictionary).valid);
/// assert!(game.is_solved());
/// # Ok::<(), letterbox_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: GeneratedPuzzle,
    board: Board,
    words: Vec<String>,
    used_letters: LetterSet,
    last_letter: Option<char>,
}

impl Game {
    /// Starts a new game on `puzzle`.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self {
            board: puzzle.board,
            puzzle,
            words: Vec::new(),
            used_letters: LetterSet::new(),
            last_letter: None,
        }
    }

    /// Returns the board as currently displayed.
    ///
    /// This is the generated board until [`shuffle`](Self::shuffle) is called.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the puzzle this game was started from.
    #[must_use]
    pub const fn puzzle(&self) -> &GeneratedPuzzle {
        &self.puzzle
    }

    /// Returns the chain the board was generated from.
    #[must_use]
    pub const fn chain(&self) -> &WordChain {
        &self.puzzle.chain
    }

    /// Returns the seed that reproduces the puzzle.
    #[must_use]
    pub const fn seed(&self) -> PuzzleSeed {
        self.puzzle.seed
    }

    /// Returns the accepted words in order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the board letters used so far.
    #[must_use]
    pub const fn used_letters(&self) -> &LetterSet {
        &self.used_letters
    }

    /// Returns the letter the next word must start with.
    #[must_use]
    pub const fn last_letter(&self) -> Option<char> {
        self.last_letter
    }

    /// Returns the board letters not yet used.
    #[must_use]
    pub fn remaining_letters(&self) -> LetterSet {
        self.board
            .letters()
            .iter()
            .filter(|&letter| !self.used_letters.contains(letter))
            .collect()
    }

    /// Returns `true` once every board letter has been used.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.letters().is_subset(&self.used_letters)
    }

    /// Checks `word` against the board and continuation letter without
    /// recording it.
    #[must_use]
    pub fn check(&self, word: &str, dictionary: &Dictionary) -> ValidationResult {
        validate_word(word, &self.board, self.last_letter, dictionary).into()
    }

    /// Validates `word` and records it if accepted.
    pub fn submit(&mut self, word: &str, dictionary: &Dictionary) -> ValidationResult {
        let result = validate_word(word, &self.board, self.last_letter, dictionary);
        if let Ok(accepted) = &result {
            self.used_letters.insert_word(&accepted.word);
            self.last_letter = Some(accepted.last_letter);
            self.words.push(accepted.word.clone());
            log::debug!(
                "accepted {} ({} of {} letters used)",
                accepted.word,
                self.used_letters.len(),
                self.board.letters().len()
            );
        }
        result.into()
    }

    /// Rearranges the displayed board.
    ///
    /// The letters stay the same, so progress is unaffected.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: rand::Rng + ?Sized,
    {
        self.board = self.board.shuffled(rng);
    }

    /// Returns a snapshot of the current progress.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            board: self.board,
            words: self.words.clone(),
            used_letters: self.used_letters.to_string(),
            remaining_letters: self.remaining_letters().to_string(),
            last_letter: self.last_letter,
            solved: self.is_solved(),
        }
    }
}

/// A serializable snapshot of a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Board as displayed.
    pub board: Board,
    /// Accepted words in order.
    pub words: Vec<String>,
    /// Used letters, sorted.
    pub used_letters: String,
    /// Unused letters, sorted.
    pub remaining_letters: String,
    /// Letter the next word must start with.
    pub last_letter: Option<char>,
    /// Whether every letter has been used.
    pub solved: bool,
}
