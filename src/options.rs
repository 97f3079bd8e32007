//! Game configuration options.

/// What the player is guessing about the hidden card.
///
/// Fixed for the duration of a game. Suit guessing is the easy mode,
/// rank guessing the hard one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuessMode {
    /// Guess the suit of the hidden card.
    #[default]
    Suit,
    /// Guess the rank of the hidden card.
    Rank,
}

/// Configuration options for a card-guessing game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cgrs::{GameOptions, GuessMode};
///
/// let options = GameOptions::default()
///     .with_guess_mode(GuessMode::Rank)
///     .with_hints(2)
///     .with_lives(Some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the player guesses suits or ranks.
    pub guess_mode: GuessMode,
    /// Number of levels in a game. The last level has two target cards.
    pub levels: u8,
    /// Seconds on the countdown for each guess.
    pub level_seconds: u8,
    /// Size of the hint pool shared across the whole game.
    pub hints: u8,
    /// Lives lost on incorrect guesses. `None` allows unlimited retries
    /// within the countdown.
    pub lives: Option<u8>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            guess_mode: GuessMode::Suit,
            levels: 10,
            level_seconds: 15,
            hints: 3,
            lives: None,
        }
    }
}

impl GameOptions {
    /// Sets the guess mode.
    ///
    /// # Example
    ///
    /// ```
    /// use cgrs::{GameOptions, GuessMode};
    ///
    /// let options = GameOptions::default().with_guess_mode(GuessMode::Rank);
    /// assert_eq!(options.guess_mode, GuessMode::Rank);
    /// ```
    #[must_use]
    pub const fn with_guess_mode(mut self, mode: GuessMode) -> Self {
        self.guess_mode = mode;
        self
    }

    /// Sets the number of levels.
    ///
    /// # Example
    ///
    /// ```
    /// use cgrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_levels(5);
    /// assert_eq!(options.levels, 5);
    /// ```
    #[must_use]
    pub const fn with_levels(mut self, levels: u8) -> Self {
        self.levels = levels;
        self
    }

    /// Sets the countdown length in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use cgrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_level_seconds(30);
    /// assert_eq!(options.level_seconds, 30);
    /// ```
    #[must_use]
    pub const fn with_level_seconds(mut self, seconds: u8) -> Self {
        self.level_seconds = seconds;
        self
    }

    /// Sets the size of the game-wide hint pool.
    ///
    /// # Example
    ///
    /// ```
    /// use cgrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hints(1);
    /// assert_eq!(options.hints, 1);
    /// ```
    #[must_use]
    pub const fn with_hints(mut self, hints: u8) -> Self {
        self.hints = hints;
        self
    }

    /// Sets the number of lives, or `None` for unlimited retries.
    ///
    /// # Example
    ///
    /// ```
    /// use cgrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_lives(Some(5));
    /// assert_eq!(options.lives, Some(5));
    /// ```
    #[must_use]
    pub const fn with_lives(mut self, lives: Option<u8>) -> Self {
        self.lives = lives;
        self
    }
}
