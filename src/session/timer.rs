use tracing::info;

use super::{Feedback, GameSession, GameState};

/// Result of a countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The tick arrived while no guess was awaited and was ignored.
    Ignored,
    /// The countdown is running; the seconds now left.
    Counting(u8),
    /// The countdown hit zero; the attempt is lost and the targets are
    /// revealed.
    TimedOut,
}

impl GameSession {
    /// Advances the countdown by one second.
    ///
    /// The host invokes this once per second while a level is active. A
    /// tick that arrives after a level has ended (a guess or a quit beat
    /// it to the state change) returns [`Tick::Ignored`] and mutates
    /// nothing, so a stale timer can never resurrect an ended level.
    /// Reaching zero loses the attempt without touching the score.
    pub fn tick(&mut self) -> Tick {
        if self.state != GameState::AwaitingGuess {
            return Tick::Ignored;
        }

        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left > 0 {
            return Tick::Counting(self.seconds_left);
        }

        info!(level = self.level_number, score = self.score, "time ran out");
        self.state = GameState::Lost;
        self.feedback = Feedback::Timeout;
        Tick::TimedOut
    }
}
