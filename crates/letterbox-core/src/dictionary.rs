//! Word list loading, filtering, and caching.
//!
//! A word list is plain UTF-8 text with one word per line. Loading trims each
//! line, uppercases it, and keeps only words of at least
//! [`MIN_WORD_LENGTH`] characters spelled entirely from the configured
//! [`Alphabet`]. Source order is preserved and duplicates are kept.

use std::{
    collections::HashSet,
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use crate::{Alphabet, MIN_WORD_LENGTH};

/// Errors that can occur while loading a dictionary.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DictionaryError {
    /// The word list could not be read.
    #[display("failed to read dictionary {}: {source}", path.display())]
    Io {
        /// Path of the word list.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// An ordered list of uppercase words with constant-time membership checks.
///
/// # Examples
///
/// ```
/// use letterbox_core::{Alphabet, Dictionary};
///
/// let text = "  crown\n\nNight\nox\ncat's\nčaj\n";
/// let dictionary = Dictionary::from_reader(text.as_bytes(), &Alphabet::default())?;
///
/// assert_eq!(dictionary.words(), ["CROWN", "NIGHT", "ČAJ"]);
/// assert!(dictionary.contains("NIGHT"));
/// assert!(!dictionary.contains("OX"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Dictionary {
    /// Loads a word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be opened or read,
    /// including when it is not valid UTF-8.
    pub fn load<P>(path: P, alphabet: &Alphabet) -> Result<Self, DictionaryError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let wrap = |source| DictionaryError::Io {
            path: path.to_owned(),
            source,
        };
        let file = fs::File::open(path).map_err(wrap)?;
        let dictionary = Self::from_reader(io::BufReader::new(file), alphabet).map_err(wrap)?;
        log::info!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Reads a word list, one word per line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading fails or a line is not valid UTF-8.
    pub fn from_reader<R>(reader: R, alphabet: &Alphabet) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Ok(Self::from_words(lines, alphabet))
    }

    /// Builds a dictionary from raw words, applying the same filtering as loading.
    #[must_use]
    pub fn from_words<I, S>(words: I, alphabet: &Alphabet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = Vec::new();
        let mut discarded = 0_usize;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_uppercase();
            if word.chars().count() >= MIN_WORD_LENGTH && alphabet.spells(&word) {
                kept.push(word);
            } else {
                discarded += 1;
            }
        }
        log::debug!("dictionary filter kept {} words, discarded {discarded}", kept.len());
        let lookup = kept.iter().cloned().collect();
        Self {
            words: kept,
            lookup,
        }
    }

    /// Returns the words in source order, duplicates included.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no word survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the dictionary.
    ///
    /// The lookup is exact; callers normalize case beforehand.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }
}

/// A dictionary file loaded once and shared until invalidated.
///
/// The word list does not change while a session runs, so it is read on
/// first use and every later call hands out the same [`Arc`]. Calling
/// [`invalidate`](Self::invalidate) drops the cached copy and the next
/// [`get`](Self::get) reloads it.
///
/// # Examples
///
/// ```no_run
/// use letterbox_core::{Alphabet, DictionaryCache};
///
/// let cache = DictionaryCache::new("words.txt", Alphabet::default());
/// let first = cache.get()?;
/// let second = cache.get()?;
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
///
/// cache.invalidate();
/// let reloaded = cache.get()?;
/// assert!(!std::sync::Arc::ptr_eq(&first, &reloaded));
/// # Ok::<(), letterbox_core::DictionaryError>(())
/// ```
#[derive(Debug)]
pub struct DictionaryCache {
    path: PathBuf,
    alphabet: Alphabet,
    cached: RwLock<Option<Arc<Dictionary>>>,
}

impl DictionaryCache {
    /// Creates an empty cache for the word list at `path`.
    #[must_use]
    pub fn new<P>(path: P, alphabet: Alphabet) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            alphabet,
            cached: RwLock::new(None),
        }
    }

    /// Returns the path of the cached word list.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the alphabet used for filtering.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the cached dictionary, loading it first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the word list has to be loaded and
    /// cannot be read. Nothing is cached in that case.
    pub fn get(&self) -> Result<Arc<Dictionary>, DictionaryError> {
        if let Some(dictionary) = self
            .cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(dictionary));
        }

        let mut cached = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have loaded it while we waited for the lock.
        if let Some(dictionary) = cached.as_ref() {
            return Ok(Arc::clone(dictionary));
        }
        let dictionary = Arc::new(Dictionary::load(&self.path, &self.alphabet)?);
        *cached = Some(Arc::clone(&dictionary));
        Ok(dictionary)
    }

    /// Drops the cached dictionary so the next access reloads it.
    pub fn invalidate(&self) {
        log::debug!("invalidating dictionary cache for {}", self.path.display());
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns `true` if a dictionary is currently cached.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn temp_word_list(contents: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let path = env::temp_dir().join(format!(
            "letterbox-dictionary-{}-{}.txt",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&path, contents).expect("temp file is writable");
        path
    }

    #[test]
    fn test_filtering() {
        let alphabet = Alphabet::default();
        let dictionary = Dictionary::from_words(
            [
                "  apple ", "", "   ", "ox", "éclair", "MÜDE", "co-op", "žaba", "Tea",
            ],
            &alphabet,
        );
        assert_eq!(dictionary.words(), ["APPLE", "MÜDE", "ŽABA", "TEA"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "ŽÄ" is four bytes but only two letters.
        let dictionary = Dictionary::from_words(["žä", "žäb"], &Alphabet::default());
        assert_eq!(dictionary.words(), ["ŽÄB"]);
    }

    #[test]
    fn test_duplicates_and_order_are_preserved() {
        let dictionary =
            Dictionary::from_words(["zebra", "apple", "Zebra"], &Alphabet::default());
        assert_eq!(dictionary.words(), ["ZEBRA", "APPLE", "ZEBRA"]);
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("ZEBRA"));
        assert!(!dictionary.contains("zebra"));
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet::new("A", "BC");
        let dictionary = Dictionary::from_words(["abc", "cab", "bad"], &alphabet);
        assert_eq!(dictionary.words(), ["ABC", "CAB"]);
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = b"crown\n\xff\xfe\n";
        let err = Dictionary::from_reader(bytes, &Alphabet::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_load_missing_file() {
        let path = env::temp_dir().join("letterbox-this-file-does-not-exist.txt");
        let err = Dictionary::load(&path, &Alphabet::default()).unwrap_err();
        let DictionaryError::Io { path: err_path, source } = &err;
        assert_eq!(err_path, &path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().starts_with("failed to read dictionary"));
    }

    #[test]
    fn test_load_file() {
        let path = temp_word_list("crown\r\nnight\nox\n");
        let dictionary = Dictionary::load(&path, &Alphabet::default()).expect("readable");
        assert_eq!(dictionary.words(), ["CROWN", "NIGHT"]);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_cache_loads_once_until_invalidated() {
        let path = temp_word_list("crown\n");
        let cache = DictionaryCache::new(&path, Alphabet::default());
        assert!(!cache.is_loaded());

        let first = cache.get().expect("readable");
        assert!(cache.is_loaded());
        assert_eq!(first.words(), ["CROWN"]);

        // Edits are not picked up while cached.
        fs::write(&path, "crown\nnight\n").expect("temp file is writable");
        let second = cache.get().expect("readable");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);

        cache.invalidate();
        assert!(!cache.is_loaded());
        let third = cache.get().expect("readable");
        assert_eq!(third.words(), ["CROWN", "NIGHT"]);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_cache_error_is_not_cached() {
        let path = env::temp_dir().join("letterbox-cache-missing-file.txt");
        let cache = DictionaryCache::new(&path, Alphabet::default());
        assert!(cache.get().is_err());
        assert!(!cache.is_loaded());
    }
}
