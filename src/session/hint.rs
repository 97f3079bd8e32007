use tracing::{debug, warn};

use crate::card::{RankBand, SuitColor};
use crate::error::HintError;
use crate::options::GuessMode;

use super::{Feedback, GameSession, GameState};

/// A coarse hint about the current target card.
///
/// Hints narrow the answer down to a category, never to the exact card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Suit mode: the target's color family.
    SuitColor(SuitColor),
    /// Rank mode: the band the target's rank falls in.
    RankBand(RankBand),
}

impl GameSession {
    /// Consumes one hint from the game-wide pool for the current guess.
    ///
    /// The pool starts at [`crate::GameOptions::hints`] for the whole game
    /// and is only refilled by [`GameSession::restart`]. Using a hint for
    /// a scoring guess drops that level's award to the flat hinted score.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::InvalidState`] when no level is awaiting a
    /// guess, [`HintError::NoHintsRemaining`] once the pool is empty, and
    /// [`HintError::AlreadyHinted`] if a hint was already taken for the
    /// guess in progress. None of these mutate the session.
    pub fn use_hint(&mut self) -> Result<Hint, HintError> {
        if self.state != GameState::AwaitingGuess {
            warn!(state = ?self.state, "hint ignored: no level awaiting a guess");
            return Err(HintError::InvalidState);
        }
        if self.hints_remaining == 0 {
            return Err(HintError::NoHintsRemaining);
        }
        if self.hinted_this_guess {
            return Err(HintError::AlreadyHinted);
        }

        let Some(&target) = self
            .level
            .as_ref()
            .and_then(|level| level.targets().get(self.active_guess_index))
        else {
            warn!(
                index = self.active_guess_index,
                "hint ignored: no target at the active guess index"
            );
            return Err(HintError::InvalidState);
        };

        self.hints_remaining -= 1;
        self.hinted_this_guess = true;
        if self.on_scoring_guess() {
            self.hint_used_this_level = true;
        }
        self.feedback = Feedback::Hint;

        let hint = match self.options.guess_mode {
            GuessMode::Suit => Hint::SuitColor(target.suit.color()),
            GuessMode::Rank => Hint::RankBand(target.rank_band()),
        };

        debug!(
            level = self.level_number,
            remaining = self.hints_remaining,
            "hint issued"
        );
        Ok(hint)
    }
}
