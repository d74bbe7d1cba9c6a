use std::{
    collections::HashMap,
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
    sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard},
};

use letterbox_core::{Board, Dictionary, WordChain};
use letterbox_generator::GeneratedPuzzle;
use crate::{Game, Progress, ValidationResult, validate};

/// Identifies one session in a [`SessionStore`].
///
/// Displayed as 16 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Creates an id from its raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s.trim(), 16).map(Self)
    }
}

/// Errors that can occur when accessing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// No session has this id.
    #[display("session {id} not found")]
    NotFound {
        /// The unknown id.
        id: SessionId,
    },
}

type SessionMap = HashMap<SessionId, Arc<Mutex<Game>>>;

/// Thread-safe store of independent game sessions.
///
/// Each session owns its board and progress behind its own lock, so players
/// never see each other's puzzles and work on different sessions does not
/// contend.
///
/// # Examples
///
/// ```
/// use letterbox_core::testing;
/// use letterbox_game::SessionStore;
/// use letterbox_generator::PuzzleGenerator;
///
/// let dictionary = testing::sample_dictionary();
/// let generator = PuzzleGenerator::new(&dictionary);
///
/// let store = SessionStore::new();
/// let a = store.create(generator.generate()?);
/// let b = store.create(generator.generate()?);
/// assert_ne!(a, b);
/// assert_eq!(store.len(), 2);
///
/// let board = store.board(a)?;
/// println!("{board}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<SessionMap>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session on `puzzle` and returns its id.
    pub fn create(&self, puzzle: GeneratedPuzzle) -> SessionId {
        let game = Arc::new(Mutex::new(Game::new(puzzle)));
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let id = loop {
            let id = SessionId(rand::random());
            if !sessions.contains_key(&id) {
                break id;
            }
        };
        sessions.insert(id, game);
        log::info!("created session {id} ({} active)", sessions.len());
        id
    }

    /// Returns the board currently displayed in the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub fn board(&self, id: SessionId) -> Result<Board, SessionError> {
        self.with_game(id, |game| *game.board())
    }

    /// Returns the chain the session's board was generated from.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub fn chain(&self, id: SessionId) -> Result<WordChain, SessionError> {
        self.with_game(id, |game| game.chain().clone())
    }

    /// Returns a snapshot of the session's progress.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub fn progress(&self, id: SessionId) -> Result<Progress, SessionError> {
        self.with_game(id, |game| game.progress())
    }

    /// Submits a word to the session, recording it if accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id. A rejected word
    /// is not an error.
    pub fn submit(
        &self,
        id: SessionId,
        word: &str,
        dictionary: &Dictionary,
    ) -> Result<ValidationResult, SessionError> {
        self.with_game(id, |game| game.submit(word, dictionary))
    }

    /// Validates a word against the session's board with a caller-supplied
    /// continuation letter. Progress is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub fn validate(
        &self,
        id: SessionId,
        word: &str,
        previous_last_letter: Option<char>,
        dictionary: &Dictionary,
    ) -> Result<ValidationResult, SessionError> {
        let board = self.board(id)?;
        Ok(validate(word, &board, previous_last_letter, dictionary))
    }

    /// Applies `f` to the session's game under its lock.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub fn with_game<T, F>(&self, id: SessionId, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut Game) -> T,
    {
        let game = self.get(id)?;
        let mut game = game.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut game))
    }

    /// Ends a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub fn remove(&self, id: SessionId) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        if sessions.remove(&id).is_none() {
            return Err(SessionError::NotFound { id });
        }
        log::info!("removed session {id}");
        Ok(())
    }

    /// Returns the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if there are no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns `true` if `id` names an active session.
    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.read().contains_key(&id)
    }

    fn get(&self, id: SessionId) -> Result<Arc<Mutex<Game>>, SessionError> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound { id })
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionMap> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }
}
