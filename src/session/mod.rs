//! Game session engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::error::{AdvanceError, StartError};
use crate::level::Level;
use crate::options::GameOptions;
use crate::snapshot::Snapshot;

mod guess;
mod hint;
pub mod state;
mod timer;

pub use guess::{Guess, GuessOutcome};
pub use hint::Hint;
pub use state::{Feedback, GameState};
pub use timer::Tick;

/// A card-guessing game engine that manages levels, guesses, hints, the
/// countdown, and scoring.
///
/// The session owns the deck and its seeded random number generator, so a
/// given seed replays the same game. All commands take `&mut self`: the
/// engine assumes one logical thread of control, and a multi-threaded host
/// serializes access around the session (for instance behind a mutex, with
/// player commands queued ahead of timer ticks).
///
/// # Example
///
/// ```no_run
/// use cgrs::{GameOptions, GameSession};
///
/// let options = GameOptions::default();
/// let mut session = GameSession::new(options, 42);
/// session.start(1).expect("a fresh deck can always supply level 1");
/// ```
#[derive(Debug)]
pub struct GameSession {
    /// Game options.
    pub options: GameOptions,
    /// The deck targets are drawn from; shared by all levels of a game.
    deck: Deck,
    /// Random number generator.
    rng: ChaCha8Rng,
    /// Current game state.
    state: GameState,
    /// The active level, retained after it ends so its targets can be
    /// revealed. Cleared by [`GameSession::quit`] and setup failures.
    level: Option<Level>,
    /// Number of the last started level.
    level_number: u8,
    /// Total score. Only ever increases.
    score: u32,
    /// Hints left in the pool shared across the whole game.
    hints_remaining: u8,
    /// Whether a hint was used for the current level's scoring guess.
    hint_used_this_level: bool,
    /// Whether a hint was already taken for the guess in progress.
    hinted_this_guess: bool,
    /// Lives left, when the lives rule is enabled.
    lives_remaining: Option<u8>,
    /// Seconds left on the countdown.
    seconds_left: u8,
    /// Which target is being guessed (only ever 1 on the final level).
    active_guess_index: usize,
    /// Category of the last feedback event.
    feedback: Feedback,
}

impl GameSession {
    /// Creates a new session with a freshly shuffled deck.
    ///
    /// The same `options` and `seed` replay the same game.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        Self {
            options,
            deck,
            rng,
            state: GameState::Idle,
            level: None,
            level_number: 1,
            score: 0,
            hints_remaining: options.hints,
            hint_used_this_level: false,
            hinted_this_guess: false,
            lives_remaining: options.lives,
            seconds_left: options.level_seconds,
            active_guess_index: 0,
            feedback: Feedback::None,
        }
    }

    /// Starts (or restarts) the given level.
    ///
    /// Draws the level's targets, resets the per-level flags and the
    /// countdown, and enters [`GameState::AwaitingGuess`]. Level 1 also
    /// reshuffles the deck, since it marks the start of a game. Callable
    /// from any state; retrying a lost level is `start(level_number())`.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidLevel`] for a level number outside the
    /// configured range (the session is left untouched), and
    /// [`StartError::InsufficientCards`] if the deck cannot supply the
    /// targets (the attempt aborts back to [`GameState::Idle`]).
    pub fn start(&mut self, level_number: u8) -> Result<(), StartError> {
        if level_number == 0 || level_number > self.options.levels {
            return Err(StartError::InvalidLevel);
        }

        if level_number == 1 {
            self.deck.shuffle(&mut self.rng);
        }

        let level = match Level::deal(
            &mut self.deck,
            &mut self.rng,
            level_number,
            self.options.levels,
        ) {
            Ok(level) => level,
            Err(err) => {
                warn!(level = level_number, %err, "level setup failed");
                self.level = None;
                self.state = GameState::Idle;
                self.feedback = Feedback::None;
                return Err(err);
            }
        };

        self.level_number = level_number;
        self.level = Some(level);
        self.hint_used_this_level = false;
        self.hinted_this_guess = false;
        self.active_guess_index = 0;
        self.seconds_left = self.options.level_seconds;
        self.state = GameState::AwaitingGuess;
        self.feedback = Feedback::None;

        debug!(
            level = level_number,
            seconds = self.seconds_left,
            "level started"
        );
        Ok(())
    }

    /// Advances from a completed level to the next one.
    ///
    /// The host calls this after its post-level delay; the engine itself
    /// never advances on its own. Returns the new level number.
    ///
    /// # Errors
    ///
    /// Returns [`AdvanceError::InvalidState`] unless the state is
    /// [`GameState::LevelComplete`], and [`AdvanceError::InsufficientCards`]
    /// if the next level's setup fails.
    pub fn advance(&mut self) -> Result<u8, AdvanceError> {
        if self.state != GameState::LevelComplete {
            return Err(AdvanceError::InvalidState);
        }

        let next = self.level_number + 1;
        match self.start(next) {
            Ok(()) => Ok(next),
            Err(StartError::InsufficientCards) => Err(AdvanceError::InsufficientCards),
            // LevelComplete is only ever entered below the final level, so
            // `next` stays in range.
            Err(StartError::InvalidLevel) => Err(AdvanceError::InvalidState),
        }
    }

    /// Restarts the game from level 1.
    ///
    /// Resets the score, refills the hint pool and lives, reshuffles the
    /// deck, and discards all in-progress level state.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InsufficientCards`] if level 1 setup fails
    /// (impossible on a standard deck).
    pub fn restart(&mut self) -> Result<(), StartError> {
        info!(score = self.score, "restarting game");
        self.score = 0;
        self.hints_remaining = self.options.hints;
        self.lives_remaining = self.options.lives;
        self.start(1)
    }

    /// Abandons the game and returns to [`GameState::Idle`].
    ///
    /// The in-progress level is discarded. Score and hints are left in
    /// place for a final read; [`GameSession::restart`] clears them when a
    /// new game begins.
    pub fn quit(&mut self) {
        debug!(score = self.score, "quitting to menu");
        self.level = None;
        self.state = GameState::Idle;
        self.feedback = Feedback::None;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the category of the last feedback event.
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns how many hints are left in the game-wide pool.
    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    /// Returns how many lives are left, when the lives rule is enabled.
    #[must_use]
    pub const fn lives_remaining(&self) -> Option<u8> {
        self.lives_remaining
    }

    /// Returns the seconds left on the countdown.
    #[must_use]
    pub const fn seconds_left(&self) -> u8 {
        self.seconds_left
    }

    /// Returns the number of the last started level.
    #[must_use]
    pub const fn level_number(&self) -> u8 {
        self.level_number
    }

    /// Returns which of the level's targets is being guessed.
    #[must_use]
    pub const fn active_guess_index(&self) -> usize {
        self.active_guess_index
    }

    /// Returns the active level, if one exists.
    ///
    /// The level remains available after it ends (for revealing its
    /// targets) until a quit or the next start.
    #[must_use]
    pub const fn current_level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    /// Returns the number of cards still behind the deck's draw cursor.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    /// Takes a read-only snapshot for the presentation layer.
    ///
    /// The target cards are included only once the level has ended, so a
    /// renderer working purely from snapshots cannot leak the answer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let revealed = match self.state {
            GameState::LevelComplete | GameState::Won | GameState::Lost => {
                self.level.as_ref().map(|level| level.targets().to_vec())
            }
            GameState::Idle | GameState::AwaitingGuess => None,
        };

        Snapshot {
            state: self.state,
            level: self.level_number,
            score: self.score,
            hints_remaining: self.hints_remaining,
            lives_remaining: self.lives_remaining,
            seconds_left: self.seconds_left,
            active_guess_index: self.active_guess_index,
            feedback: self.feedback,
            revealed,
        }
    }

    /// Whether the guess in progress is the one that determines the
    /// level's score: the only guess on a one-target level, the second
    /// guess on the final level.
    fn on_scoring_guess(&self) -> bool {
        self.level
            .as_ref()
            .is_some_and(|level| self.active_guess_index + 1 == level.required_guesses())
    }

    /// Adds the score for a scoring-correct guess and returns it.
    fn award_points(&mut self) -> u32 {
        let awarded = if self.hint_used_this_level {
            5
        } else {
            10 + u32::from(self.level_number)
        };
        self.score += awarded;
        awarded
    }
}
