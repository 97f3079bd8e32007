//! A card-guessing game engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] type that manages the full game
//! flow: level setup, guess evaluation, hint issuance, the per-level
//! countdown, scoring, and win/loss detection. The presentation layer
//! (rendering, audio, dialogs) stays outside; it drives the session through
//! its command methods and reads back a [`Snapshot`] after each transition.
//!
//! # Example
//!
//! ```no_run
//! use cgrs::{GameOptions, GameSession, GuessMode};
//!
//! let options = GameOptions::default().with_guess_mode(GuessMode::Rank);
//! let mut session = GameSession::new(options, 42);
//! session.start(1).expect("a fresh deck can always supply level 1");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod level;
pub mod options;
pub mod session;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, RankBand, Suit, SuitColor};
pub use deck::Deck;
pub use error::{AdvanceError, DrawError, GuessError, HintError, StartError};
pub use level::Level;
pub use options::{GameOptions, GuessMode};
pub use session::{Feedback, GameSession, GameState, Guess, GuessOutcome, Hint, Tick};
pub use snapshot::Snapshot;
