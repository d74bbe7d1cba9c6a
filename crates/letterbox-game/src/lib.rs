//! Playing Letter Boxed puzzles.
//!
//! # Overview
//!
//! - [`validate`]: checks a word against a board, the continuation letter,
//!   and a dictionary, returning a [`ValidationResult`]
//! - [`Selection`]: builds a word by picking letters off the board under the
//!   adjacency rules
//! - [`Game`]: one player's accepted words and covered letters
//! - [`SessionStore`]: many independent games shared across threads
//!
//! # Examples
//!
//! ```
//! use letterbox_core::{Alphabet, Dictionary};
//! use letterbox_game::{Game, validate};
//! use letterbox_generator::PuzzleGenerator;
//!
//! let dictionary = Dictionary::from_words(["crown", "night"], &Alphabet::default());
//! let puzzle = PuzzleGenerator::new(&dictionary).generate()?;
//!
//! let result = validate("ox", &puzzle.board, None, &dictionary);
//! assert_eq!(result.message, "word must contain at least 3 letters");
//!
//! let mut game = Game::new(puzzle);
//! game.submit("crown", &dictionary);
//! game.submit("night", &dictionary);
//! assert!(game.is_solved());
//! # Ok::<(), letterbox_generator::GenerateError>(())
//! ```

pub use self::{
    game::{Game, Progress},
    selection::{SelectOutcome, Selection, SelectionError, Slot},
    session::{SessionError, SessionId, SessionStore},
    validation::{
        ACCEPTED_MESSAGE, AcceptedWord, Rejection, ValidationResult, normalize_word, validate,
        validate_word,
    },
};

mod game;
mod selection;
mod session;
mod validation;
