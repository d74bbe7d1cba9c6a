use letterbox_core::{Dictionary, LetterSet, MAX_CHAIN_LENGTH, REQUIRED_LETTERS_COUNT, WordChain};
use rand::{Rng, seq::IndexedRandom as _};

use crate::WordIndex;

/// Default number of random attempts in one chain search.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// A chain accepted by the search, with the letters it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMatch {
    /// The accepted word chain.
    pub chain: WordChain,
    /// Distinct letters of the chain; always [`REQUIRED_LETTERS_COUNT`] of them.
    pub letters: LetterSet,
    /// Number of attempts used, including the successful one.
    pub attempts: usize,
}

/// Randomized search for word chains covering exactly
/// [`REQUIRED_LETTERS_COUNT`] distinct letters.
///
/// Each attempt picks a random starting word and greedily extends the chain
/// with random words that start with the current last letter and add at least
/// one new letter. An attempt that gets stuck is abandoned and the search
/// restarts from a fresh random word; there is no backtracking.
///
/// The random source is passed in by the caller, so a seeded RNG replays the
/// same search.
///
/// # Examples
///
/// ```
/// use letterbox_core::{Alphabet, Dictionary};
/// use letterbox_generator::ChainFinder;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let dictionary = Dictionary::from_words(["crown", "night"], &Alphabet::default());
/// let finder = ChainFinder::new(&dictionary);
/// let mut rng = Pcg64::seed_from_u64(42);
///
/// let found = finder.find(&mut rng, 100).expect("CROWN → NIGHT is reachable");
/// assert_eq!(found.chain.words(), ["CROWN", "NIGHT"]);
/// assert_eq!(found.letters.len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct ChainFinder<'a> {
    words: &'a [String],
    index: WordIndex<'a>,
}

impl<'a> ChainFinder<'a> {
    /// Creates a finder over `dictionary`, building its word index.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            words: dictionary.words(),
            index: WordIndex::new(dictionary),
        }
    }

    /// Returns the word index used by the search.
    #[must_use]
    pub fn index(&self) -> &WordIndex<'a> {
        &self.index
    }

    /// Runs up to `max_attempts` independent attempts and returns the first
    /// accepted chain.
    ///
    /// Returns `None` if every attempt fails, or immediately if the
    /// dictionary is empty.
    pub fn find<R>(&self, rng: &mut R, max_attempts: usize) -> Option<ChainMatch>
    where
        R: Rng + ?Sized,
    {
        if self.words.is_empty() {
            return None;
        }
        for attempt in 1..=max_attempts {
            if let Some((chain, letters)) = self.attempt(rng) {
                return Some(ChainMatch {
                    chain,
                    letters,
                    attempts: attempt,
                });
            }
        }
        None
    }

    fn attempt<R>(&self, rng: &mut R) -> Option<(WordChain, LetterSet)>
    where
        R: Rng + ?Sized,
    {
        let first: &str = self.words.choose(rng)?;
        let mut chain = vec![first];
        let mut letters = LetterSet::from_word(first);
        let mut last = first;

        while chain.len() < MAX_CHAIN_LENGTH && letters.len() < REQUIRED_LETTERS_COUNT {
            let last_letter = last.chars().next_back()?;
            let candidates: Vec<&str> = self
                .index
                .starting_with(last_letter)
                .iter()
                .copied()
                .filter(|word| letters.adds_letters(word))
                .collect();
            let Some(&next) = candidates.choose(rng) else {
                break;
            };
            chain.push(next);
            letters.insert_word(next);
            last = next;
        }

        if letters.len() != REQUIRED_LETTERS_COUNT {
            return None;
        }
        // Linked and within length by construction.
        let chain = WordChain::new(chain.into_iter().map(str::to_owned).collect()).ok()?;
        Some((chain, letters))
    }
}

/// Builds a [`ChainFinder`] for `dictionary` and runs one search.
///
/// # Examples
///
/// ```
/// use letterbox_core::testing;
/// use letterbox_generator::{DEFAULT_MAX_ATTEMPTS, find_chain};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let dictionary = testing::sample_dictionary();
/// let mut rng = Pcg64::seed_from_u64(1);
/// if let Some(found) = find_chain(&dictionary, DEFAULT_MAX_ATTEMPTS, &mut rng) {
///     assert_eq!(found.letters, found.chain.letters());
/// }
/// ```
pub fn find_chain<R>(
    dictionary: &Dictionary,
    max_attempts: usize,
    rng: &mut R,
) -> Option<ChainMatch>
where
    R: Rng + ?Sized,
{
    ChainFinder::new(dictionary).find(rng, max_attempts)
}
