use tracing::{debug, info, warn};

use crate::card::{Card, Suit};
use crate::error::GuessError;
use crate::options::GuessMode;

use super::{Feedback, GameSession, GameState};

/// A single guess about the hidden card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// A suit guess.
    Suit(Suit),
    /// A rank guess (2-14).
    Rank(u8),
}

impl Guess {
    /// Whether the guess matches the target under the configured mode.
    ///
    /// A guess of the wrong kind for the mode never matches.
    const fn matches(self, target: Card, mode: GuessMode) -> bool {
        match (mode, self) {
            (GuessMode::Suit, Self::Suit(suit)) => suit as u8 == target.suit as u8,
            (GuessMode::Rank, Self::Rank(rank)) => rank == target.rank,
            _ => false,
        }
    }
}

/// Outcome of submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was wrong; the level continues and may be retried.
    Incorrect,
    /// The guess was wrong and the last life was lost; the game is over.
    OutOfLives,
    /// The first of the final level's two targets was guessed; the
    /// countdown was rearmed for the second one.
    FirstTargetCorrect,
    /// The level was cleared and points were awarded.
    LevelComplete {
        /// Points added to the score.
        awarded: u32,
    },
    /// The final level was cleared; the game is won.
    GameWon {
        /// Points added to the score.
        awarded: u32,
    },
}

impl GameSession {
    /// Submits a guess for the current target card.
    ///
    /// `None` is the "no selection" sentinel and always counts as
    /// incorrect, as does a guess of the wrong kind for the configured
    /// mode. Incorrect guesses leave the countdown running and may be
    /// retried until it expires (or, with lives enabled, until the lives
    /// run out). A correct guess on the scoring guess awards
    /// `10 + level` points, or a flat `5` when a hint was used for it.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidState`] when no level is awaiting a
    /// guess; the call is logged and leaves the session untouched, so
    /// integration bugs (a stray button event after the level ended)
    /// cannot corrupt a running game.
    pub fn submit_guess(&mut self, guess: Option<Guess>) -> Result<GuessOutcome, GuessError> {
        if self.state != GameState::AwaitingGuess {
            warn!(state = ?self.state, "guess ignored: no level awaiting a guess");
            return Err(GuessError::InvalidState);
        }

        let Some(&target) = self
            .level
            .as_ref()
            .and_then(|level| level.targets().get(self.active_guess_index))
        else {
            warn!(
                index = self.active_guess_index,
                "guess ignored: no target at the active guess index"
            );
            return Err(GuessError::InvalidState);
        };

        let correct = guess.is_some_and(|guess| guess.matches(target, self.options.guess_mode));

        if !correct {
            debug!(level = self.level_number, "incorrect guess");
            self.feedback = Feedback::Incorrect;

            if let Some(lives) = &mut self.lives_remaining {
                *lives = lives.saturating_sub(1);
                if *lives == 0 {
                    info!(level = self.level_number, "out of lives");
                    self.state = GameState::Lost;
                    self.feedback = Feedback::Loss;
                    return Ok(GuessOutcome::OutOfLives);
                }
            }

            return Ok(GuessOutcome::Incorrect);
        }

        if !self.on_scoring_guess() {
            // First of the final level's two targets: rearm the countdown
            // and the hint latch, then wait for the second guess.
            self.active_guess_index += 1;
            self.hinted_this_guess = false;
            self.hint_used_this_level = false;
            self.seconds_left = self.options.level_seconds;
            self.feedback = Feedback::Correct;
            debug!(level = self.level_number, "first target correct");
            return Ok(GuessOutcome::FirstTargetCorrect);
        }

        let awarded = self.award_points();

        if self.level_number == self.options.levels {
            self.state = GameState::Won;
            self.feedback = Feedback::Win;
            info!(awarded, score = self.score, "game won");
            Ok(GuessOutcome::GameWon { awarded })
        } else {
            self.state = GameState::LevelComplete;
            self.feedback = Feedback::Correct;
            info!(
                level = self.level_number,
                awarded,
                score = self.score,
                "level complete"
            );
            Ok(GuessOutcome::LevelComplete { awarded })
        }
    }
}
