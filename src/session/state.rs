//! Session state and feedback categories.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No level is active (selection menu, or after a quit/setup failure).
    Idle,
    /// A level is active and a guess is awaited.
    AwaitingGuess,
    /// The level was cleared; waiting to advance.
    LevelComplete,
    /// The final level was cleared.
    Won,
    /// The attempt ended (countdown ran out, or lives were exhausted).
    Lost,
}

/// Category of the feedback message to show the player.
///
/// Updated on every transition; the presentation layer maps each category
/// to its own text, colors, and sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing to report (level just started).
    None,
    /// The last guess was correct.
    Correct,
    /// The last guess was incorrect.
    Incorrect,
    /// A hint was just issued.
    Hint,
    /// The countdown ran out.
    Timeout,
    /// The game was won.
    Win,
    /// The game was lost for a reason other than the countdown.
    Loss,
}
