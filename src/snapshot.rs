//! Read-only session views for the presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::session::{Feedback, GameState};

/// A read-only view of the session, taken after a transition.
///
/// The presentation layer polls this (or receives it pushed after each
/// command) and renders from it alone. Target cards appear in `revealed`
/// only once the level has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// Number of the last started level.
    pub level: u8,
    /// Current score.
    pub score: u32,
    /// Hints left in the game-wide pool.
    pub hints_remaining: u8,
    /// Lives left, when the lives rule is enabled.
    pub lives_remaining: Option<u8>,
    /// Seconds left on the countdown.
    pub seconds_left: u8,
    /// Which of the level's targets is being guessed.
    pub active_guess_index: usize,
    /// Category of the last feedback event.
    pub feedback: Feedback,
    /// The level's target card(s), present only on level-ending states.
    pub revealed: Option<Vec<Card>>,
}
