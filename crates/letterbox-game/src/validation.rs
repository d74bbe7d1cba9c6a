//! Word validation against a board and dictionary.
//!
//! Validation is stateless: the continuation letter (the last letter of the
//! previously accepted word) is supplied by the caller and echoed back on
//! success so the caller can pass it into the next check.
//!
//! An invalid word is an expected outcome, not an error. Validation always
//! returns a [`ValidationResult`] carrying a human-readable reason.

use letterbox_core::{Board, Dictionary, MIN_WORD_LENGTH};
use serde::Serialize;

/// Message returned for an accepted word.
pub const ACCEPTED_MESSAGE: &str = "word accepted";

/// Why a word was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Rejection {
    /// The word is shorter than [`MIN_WORD_LENGTH`].
    #[display("word must contain at least {MIN_WORD_LENGTH} letters")]
    TooShort {
        /// Length of the submitted word in characters.
        len: usize,
    },
    /// The word uses letters that are not on the board.
    #[display("invalid letters used: {}", join_letters(letters))]
    InvalidLetters {
        /// Offending letters in order of first appearance, without repeats.
        letters: Vec<char>,
    },
    /// The word does not continue from the previous word.
    #[display("word must start with '{expected}'")]
    WrongStart {
        /// Last letter of the previous word.
        expected: char,
    },
    /// The word is not in the dictionary.
    #[display("word '{word}' not found in dictionary")]
    NotInDictionary {
        /// The normalized word.
        word: String,
    },
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A word that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    /// The normalized (trimmed, uppercase) word.
    pub word: String,
    /// Its last letter, which the next word must start with.
    pub last_letter: char,
}

/// Outcome of validating one word.
///
/// Serializes as `{"valid": .., "message": .., "last_letter": ..}`, with
/// `last_letter` present only for accepted words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the word was accepted.
    pub valid: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Last letter of the accepted word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_letter: Option<char>,
    /// Reason for rejection, if any.
    #[serde(skip)]
    pub rejection: Option<Rejection>,
}

impl From<Result<AcceptedWord, Rejection>> for ValidationResult {
    fn from(result: Result<AcceptedWord, Rejection>) -> Self {
        match result {
            Ok(accepted) => Self {
                valid: true,
                message: ACCEPTED_MESSAGE.to_owned(),
                last_letter: Some(accepted.last_letter),
                rejection: None,
            },
            Err(rejection) => Self {
                valid: false,
                message: rejection.to_string(),
                last_letter: None,
                rejection: Some(rejection),
            },
        }
    }
}

/// Normalizes a submitted word: surrounding whitespace removed, uppercased.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

/// Checks a word and returns either the accepted word or the first failed rule.
///
/// The word is normalized first. Rules are checked in order and the first
/// failure wins:
///
/// 1. at least [`MIN_WORD_LENGTH`] letters
/// 2. every letter appears on the board
/// 3. starts with `previous_last_letter`, when one is given
/// 4. appears in the dictionary
///
/// # Errors
///
/// Returns the [`Rejection`] for the first rule the word breaks.
pub fn validate_word(
    word: &str,
    board: &Board,
    previous_last_letter: Option<char>,
    dictionary: &Dictionary,
) -> Result<AcceptedWord, Rejection> {
    let word = normalize_word(word);

    let len = word.chars().count();
    if len < MIN_WORD_LENGTH {
        return Err(Rejection::TooShort { len });
    }

    let mut invalid = Vec::new();
    for letter in word.chars() {
        if !board.contains(letter) && !invalid.contains(&letter) {
            invalid.push(letter);
        }
    }
    if !invalid.is_empty() {
        return Err(Rejection::InvalidLetters { letters: invalid });
    }

    if let Some(expected) = previous_last_letter
        && !word.starts_with(expected)
    {
        return Err(Rejection::WrongStart { expected });
    }

    if !dictionary.contains(&word) {
        return Err(Rejection::NotInDictionary { word });
    }

    let Some(last_letter) = word.chars().next_back() else {
        return Err(Rejection::TooShort { len });
    };
    Ok(AcceptedWord { word, last_letter })
}

/// Validates a word against a board, continuation letter, and dictionary.
///
/// # Examples
///
/// ```
/// use letterbox_core::{Alphabet, Board, Dictionary};
/// use letterbox_game::validate;
///
/// let dictionary = Dictionary::from_words(["crown", "night"], &Alphabet::default());
/// let board: Board = "CRO/WNI/GHT/TCR".parse()?;
///
/// let first = validate("crown", &board, None, &dictionary);
/// assert!(first.valid);
/// assert_eq!(first.last_letter, Some('N'));
///
/// let second = validate("night", &board, first.last_letter, &dictionary);
/// assert!(second.valid);
///
/// let wrong = validate("crown", &board, second.last_letter, &dictionary);
/// assert!(!wrong.valid);
/// assert_eq!(wrong.message, "word must start with 'T'");
/// # Ok::<(), letterbox_core::BoardParseError>(())
/// ```
#[must_use]
pub fn validate(
    word: &str,
    board: &Board,
    previous_last_letter: Option<char>,
    dictionary: &Dictionary,
) -> ValidationResult {
    validate_word(word, board, previous_last_letter, dictionary).into()
}
