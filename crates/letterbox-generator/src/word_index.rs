use std::collections::HashMap;

use letterbox_core::Dictionary;

/// Dictionary words grouped by their first letter.
///
/// Each group keeps dictionary order, duplicates included, so a seeded search
/// over the index is reproducible.
///
/// # Examples
///
/// ```
/// use letterbox_core::{Alphabet, Dictionary};
/// use letterbox_generator::WordIndex;
///
/// let dictionary = Dictionary::from_words(["night", "crown", "nest"], &Alphabet::default());
/// let index = WordIndex::new(&dictionary);
///
/// assert_eq!(index.starting_with('N'), ["NIGHT", "NEST"]);
/// assert!(index.starting_with('Z').is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordIndex<'a> {
    by_first_letter: HashMap<char, Vec<&'a str>>,
}

impl<'a> WordIndex<'a> {
    /// Builds the index for `dictionary`.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let mut by_first_letter: HashMap<char, Vec<&'a str>> = HashMap::new();
        for word in dictionary.words() {
            if let Some(first) = word.chars().next() {
                by_first_letter.entry(first).or_default().push(word);
            }
        }
        Self { by_first_letter }
    }

    /// Returns the words starting with `letter`, in dictionary order.
    #[must_use]
    pub fn starting_with(&self, letter: char) -> &[&'a str] {
        self.by_first_letter
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of distinct first letters.
    #[must_use]
    pub fn first_letter_count(&self) -> usize {
        self.by_first_letter.len()
    }
}
