//! Card types and the guess categories derived from them.

use core::fmt;

/// Card suit.
///
/// Discriminants match the wire codes used by the presentation layer:
/// 0 = Hearts, 1 = Diamonds, 2 = Clubs, 3 = Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Hearts.
    Hearts = 0,
    /// Diamonds.
    Diamonds = 1,
    /// Clubs.
    Clubs = 2,
    /// Spades.
    Spades = 3,
}

impl Suit {
    /// All four suits, in code order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the numeric suit code (0-3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a suit by its numeric code.
    ///
    /// Returns `None` for codes outside 0-3.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Hearts),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Clubs),
            3 => Some(Self::Spades),
            _ => None,
        }
    }

    /// Returns the color family of the suit.
    #[must_use]
    pub const fn color(self) -> SuitColor {
        match self {
            Self::Hearts | Self::Diamonds => SuitColor::Red,
            Self::Clubs | Self::Spades => SuitColor::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Suit color family, the coarse category revealed by suit-mode hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitColor {
    /// Hearts and Diamonds.
    Red,
    /// Clubs and Spades.
    Black,
}

/// Rank band, the coarse category revealed by rank-mode hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankBand {
    /// Ranks 2-6.
    Low,
    /// Ranks 7-10.
    Medium,
    /// Jack through Ace (11-14).
    High,
}

impl RankBand {
    /// Returns the band a rank falls in.
    ///
    /// Ranks below 2 are clamped into [`RankBand::Low`] and ranks above 14
    /// into [`RankBand::High`]; valid cards never hit either case.
    #[must_use]
    pub const fn of(rank: u8) -> Self {
        match rank {
            0..=6 => Self::Low,
            7..=10 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2-10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted but never occur in a [`crate::Deck`]-built card.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank band this card falls in.
    #[must_use]
    pub const fn rank_band(self) -> RankBand {
        RankBand::of(self.rank)
    }
}

impl fmt::Display for Card {
    /// Formats the card as e.g. "Ace of Spades", the form shown to the
    /// player when a target card is revealed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            11 => write!(f, "Jack of {}", self.suit),
            12 => write!(f, "Queen of {}", self.suit),
            13 => write!(f, "King of {}", self.suit),
            14 => write!(f, "Ace of {}", self.suit),
            rank => write!(f, "{rank} of {}", self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Lowest card rank (2).
pub const RANK_MIN: u8 = 2;

/// Highest card rank (14, the Ace).
pub const RANK_MAX: u8 = 14;
