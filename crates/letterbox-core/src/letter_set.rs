//! A set of distinct letters.
//!
//! [`LetterSet`] keeps its letters sorted so that iteration order never
//! depends on hashing. Seeded puzzle generation relies on this to replay the
//! same board from the same seed.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

/// A sorted set of distinct letters.
///
/// # Examples
///
/// ```
/// use letterbox_core::LetterSet;
///
/// let mut letters = LetterSet::from_word("CROWN");
/// assert_eq!(letters.len(), 5);
///
/// // Merging a word reports how many letters were new
/// assert_eq!(letters.insert_word("NIGHT"), 4);
/// assert_eq!(letters.len(), 9);
/// assert_eq!(letters.to_string(), "CGHINORTW");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    letters: BTreeSet<char>,
}

impl LetterSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding the distinct characters of `word`.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        word.chars().collect()
    }

    /// Returns the number of distinct letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns `true` if `letter` is in the set.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Inserts a letter, returning `true` if it was not present.
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(letter)
    }

    /// Inserts every character of `word`, returning how many were new.
    pub fn insert_word(&mut self, word: &str) -> usize {
        word.chars().filter(|&c| self.letters.insert(c)).count()
    }

    /// Returns `true` if `word` has at least one character not in the set.
    #[must_use]
    pub fn adds_letters(&self, word: &str) -> bool {
        word.chars().any(|c| !self.letters.contains(&c))
    }

    /// Returns `true` if every letter of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.letters.is_subset(&other.letters)
    }

    /// Iterates over the letters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Collects the letters into a vector in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<char> {
        self.iter().collect()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for LetterSet {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        self.letters.extend(iter);
    }
}

impl Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_word_deduplicates() {
        let letters = LetterSet::from_word("BANANA");
        assert_eq!(letters.to_vec(), vec!['A', 'B', 'N']);
    }

    #[test]
    fn test_insert_word_counts_new_letters() {
        let mut letters = LetterSet::from_word("CAT");
        assert_eq!(letters.insert_word("TACT"), 0);
        assert_eq!(letters.insert_word("TOAD"), 2);
        assert_eq!(letters.len(), 5);
    }

    #[test]
    fn test_adds_letters() {
        let letters = LetterSet::from_word("CROWN");
        assert!(!letters.adds_letters("CORN"));
        assert!(letters.adds_letters("NIGHT"));
        assert!(!letters.adds_letters(""));
    }

    #[test]
    fn test_subset_and_extend() {
        let small = LetterSet::from_word("OX");
        let mut big = LetterSet::from_word("BOX");
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        big.extend("ÄŽ".chars());
        assert_eq!(big.to_string(), "BOXÄŽ");
    }

    proptest! {
        #[test]
        fn test_insert_word_merges_letters(first in "[A-ZÄÖÜ]{0,12}", second in "[A-ZÄÖÜ]{0,12}") {
            let mut letters = LetterSet::from_word(&first);
            let before = letters.len();
            let added = letters.insert_word(&second);

            prop_assert_eq!(&letters, &LetterSet::from_word(&format!("{first}{second}")));
            prop_assert_eq!(added, letters.len() - before);
            prop_assert_eq!(added > 0, LetterSet::from_word(&first).adds_letters(&second));
            prop_assert!(letters.to_vec().windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
