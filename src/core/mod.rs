//! Core types: cards, the deck source, positions, outcomes, RNG.

pub mod card;
pub mod deck;
pub mod outcome;
pub mod position;
pub mod rng;

pub use card::{Card, CardId, Color, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use outcome::Outcome;
pub use position::{ExtendDir, NavDir, Position};
pub use rng::DeckRng;
