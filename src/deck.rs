//! Deck construction, shuffling, and cursor-based drawing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, RANK_MAX, RANK_MIN, Suit};
use crate::error::DrawError;

/// An ordered deck of cards with a draw cursor.
///
/// [`Deck::standard`] builds all 52 distinct (suit, rank) combinations.
/// Drawing walks the deck front to back; [`Deck::shuffle`] permutes the
/// order and rewinds the cursor. Cards in front of the cursor are
/// considered dealt until the next shuffle.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Index of the next card to draw.
    cursor: usize,
}

impl Deck {
    /// Creates an unshuffled standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in RANK_MIN..=RANK_MAX {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards, cursor: 0 }
    }

    /// Creates a deck that deals the given cards in order.
    ///
    /// Useful for deterministic setups and tests. Uniqueness is not
    /// enforced here; only [`Deck::standard`] carries the
    /// every-combination-exactly-once invariant.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Uniformly permutes the deck and rewinds the draw cursor.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
        self.cursor = 0;
    }

    /// Draws the next card and advances the cursor.
    ///
    /// An exhausted deck reshuffles itself once and retries, so a draw only
    /// fails on a deck with no cards at all.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if the deck cannot supply a card
    /// even after reshuffling.
    pub fn draw(&mut self, rng: &mut ChaCha8Rng) -> Result<Card, DrawError> {
        if self.cursor >= self.cards.len() {
            if self.cards.is_empty() {
                return Err(DrawError::Exhausted);
            }
            debug!(cards = self.cards.len(), "deck exhausted, reshuffling");
            self.shuffle(rng);
        }

        let card = self.cards[self.cursor];
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards still behind the draw cursor.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the total number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
