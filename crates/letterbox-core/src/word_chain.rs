//! Sequences of words linked last letter to first letter.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::{LetterSet, MAX_CHAIN_LENGTH};

/// Errors that can occur when building a [`WordChain`] from caller-supplied words.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ChainError {
    /// The chain had no words or more than [`MAX_CHAIN_LENGTH`].
    #[display("chain must have 1 to {MAX_CHAIN_LENGTH} words, got {len}")]
    Length {
        /// Number of words supplied.
        len: usize,
    },
    /// A word was empty.
    #[display("chain word {index} is empty")]
    EmptyWord {
        /// Zero-based index of the empty word.
        index: usize,
    },
    /// A word did not start with the previous word's last letter.
    #[display("chain word {index} must start with '{expected}'")]
    Broken {
        /// Zero-based index of the offending word.
        index: usize,
        /// Last letter of the previous word.
        expected: char,
    },
}

/// An ordered sequence of 1 to [`MAX_CHAIN_LENGTH`] words in which every word
/// after the first starts with the last letter of the word before it.
///
/// Chains found by the generator additionally cover exactly
/// [`REQUIRED_LETTERS_COUNT`](crate::REQUIRED_LETTERS_COUNT) distinct letters.
///
/// # Examples
///
/// ```
/// use letterbox_core::WordChain;
///
/// let chain = WordChain::new(vec!["CROWN".into(), "NIGHT".into()])?;
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain.letters().len(), 9);
/// assert_eq!(chain.to_string(), "CROWN → NIGHT");
///
/// assert!(WordChain::new(vec!["CROWN".into(), "TIGHT".into()]).is_err());
/// # Ok::<(), letterbox_core::ChainError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WordChain {
    words: Vec<String>,
}

impl WordChain {
    /// Creates a chain, checking its length and linkage.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Length`] if there are no words or too many,
    /// [`ChainError::EmptyWord`] if a word is empty, and
    /// [`ChainError::Broken`] if two adjacent words are not linked.
    pub fn new(words: Vec<String>) -> Result<Self, ChainError> {
        if words.is_empty() || words.len() > MAX_CHAIN_LENGTH {
            return Err(ChainError::Length { len: words.len() });
        }
        let mut previous_last = None;
        for (index, word) in words.iter().enumerate() {
            let (Some(first), Some(last)) = (word.chars().next(), word.chars().next_back())
            else {
                return Err(ChainError::EmptyWord { index });
            };
            if let Some(expected) = previous_last
                && first != expected
            {
                return Err(ChainError::Broken { index, expected });
            }
            previous_last = Some(last);
        }
        Ok(Self { words })
    }

    /// Returns the words in chain order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a chain holds at least one word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the distinct letters used across all words.
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.words.iter().flat_map(|word| word.chars()).collect()
    }

    /// Returns the last letter of the last word.
    #[must_use]
    pub fn last_letter(&self) -> Option<char> {
        self.words.last()?.chars().next_back()
    }
}

impl Display for WordChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" → "))
    }
}
