//! The deck source: a shuffled sequence of 52 unique rank/suit pairs.
//!
//! The engine consumes a deck exactly once, at game start, to deal the
//! tableau and fill the stock. Card ids are assigned by the *dealer* in deal
//! order, so the deck itself is just the pair sequence.

use serde::{Deserialize, Serialize};

use super::card::{Rank, Suit};
use super::rng::DeckRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered sequence of 52 unique rank/suit pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<(Rank, Suit)>,
}

impl Deck {
    /// The standard deck in a fixed order: suits per `Suit::ALL`, ranks Ace
    /// through King within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::all() {
                cards.push((rank, suit));
            }
        }
        Self { cards }
    }

    /// A standard deck shuffled with the given seed.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        let mut rng = DeckRng::new(seed);
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from an explicit pair sequence.
    ///
    /// Panics unless the sequence holds exactly the 52 distinct rank/suit
    /// combinations.
    #[must_use]
    pub fn from_pairs(pairs: &[(Rank, Suit)]) -> Self {
        assert_eq!(pairs.len(), DECK_SIZE, "Deck must hold {DECK_SIZE} cards");
        let mut seen = [false; DECK_SIZE];
        for &(rank, suit) in pairs {
            let suit_idx = Suit::ALL
                .iter()
                .position(|&s| s == suit)
                .expect("suit is one of the four");
            let slot = suit_idx * Rank::COUNT as usize + (rank.value() - 1) as usize;
            assert!(!seen[slot], "Duplicate card {rank}{suit} in deck");
            seen[slot] = true;
        }
        Self {
            cards: pairs.to_vec(),
        }
    }

    /// The pair sequence, first card dealt first.
    #[must_use]
    pub fn pairs(&self) -> &[(Rank, Suit)] {
        &self.cards
    }
}
