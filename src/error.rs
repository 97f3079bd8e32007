//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck could not supply a card even after one reshuffle.
    #[error("deck could not supply a card even after reshuffling")]
    Exhausted,
}

/// Errors that can occur when starting a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// Level number is outside the configured range.
    #[error("level number is outside the configured range")]
    InvalidLevel,
    /// The deck could not supply the cards the level requires.
    #[error("deck could not supply the cards the level requires")]
    InsufficientCards,
}

/// Errors that can occur when advancing to the next level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// No completed level to advance from.
    #[error("no completed level to advance from")]
    InvalidState,
    /// The deck could not supply the cards the next level requires.
    #[error("deck could not supply the cards the next level requires")]
    InsufficientCards,
}

/// Errors that can occur when submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// No level is awaiting a guess.
    #[error("no level is awaiting a guess")]
    InvalidState,
}

/// Errors that can occur when requesting a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintError {
    /// No level is awaiting a guess.
    #[error("no level is awaiting a guess")]
    InvalidState,
    /// The session-wide hint pool is empty.
    #[error("no hints remaining")]
    NoHintsRemaining,
    /// A hint was already taken for the current guess.
    #[error("a hint was already taken for this guess")]
    AlreadyHinted,
}
