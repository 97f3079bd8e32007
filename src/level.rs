//! Level setup: drawing the target cards for one level.

use alloc::vec::Vec;

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::StartError;

/// One level of the game and its hidden target card(s).
///
/// Every level draws a single target card, except the final level which
/// draws two and requires them to be guessed in order. The targets are
/// drawn once at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct Level {
    /// Level number (1-based).
    number: u8,
    /// The hidden cards the player must guess, in guess order.
    targets: Vec<Card>,
}

impl Level {
    /// Draws the targets for level `number` from `deck`.
    ///
    /// `final_level` is the last level of the game; it draws two targets,
    /// every other level draws one.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidLevel`] if `number` is zero or beyond
    /// `final_level`, and [`StartError::InsufficientCards`] if the deck
    /// cannot supply the required targets.
    pub fn deal(
        deck: &mut Deck,
        rng: &mut ChaCha8Rng,
        number: u8,
        final_level: u8,
    ) -> Result<Self, StartError> {
        if number == 0 || number > final_level {
            return Err(StartError::InvalidLevel);
        }

        let count = if number == final_level { 2 } else { 1 };
        let mut targets = Vec::with_capacity(count);

        for _ in 0..count {
            let card = deck
                .draw(rng)
                .map_err(|_| StartError::InsufficientCards)?;
            targets.push(card);
        }

        Ok(Self { number, targets })
    }

    /// Returns the level number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns the hidden target cards, in guess order.
    #[must_use]
    pub fn targets(&self) -> &[Card] {
        &self.targets
    }

    /// Returns how many guesses this level requires.
    #[must_use]
    pub fn required_guesses(&self) -> usize {
        self.targets.len()
    }
}
