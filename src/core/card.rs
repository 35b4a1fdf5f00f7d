//! Card identity: rank, suit, color, and the face-up flag.
//!
//! Every card in a game has a unique `CardId`, assigned in deal order when
//! the deck is laid out. Identity matters: while a move is pending, the card
//! a player is holding must be trackable as the *same* card across zones, so
//! zone transfers match by id, never by rank/suit equality (two decks could
//! in principle hold equal-looking but distinct cards).
//!
//! ## Usage
//!
//! ```
//! use patience_engine::core::{Card, CardId, Color, Rank, Suit};
//!
//! let card = Card::new(CardId::new(0), Rank::ACE, Suit::Spades);
//! assert_eq!(card.color(), Color::Black);
//! assert!(!card.face_up());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one deal.
///
/// Ids are assigned 0..52 in deal order and stay with the card until the
/// next game resets the whole set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// Number of distinct ranks.
    pub const COUNT: u8 = 13;

    /// Create a rank. Panics outside 1..=13.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!((1..=13).contains(&value), "Rank must be 1..=13, got {value}");
        Self(value)
    }

    /// Get the raw rank value (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if `self` is exactly one rank above `other`.
    ///
    /// This is the ascending-foundation / descending-tableau step test:
    /// `Rank::new(3).is_next_above(Rank::new(2))` is true.
    #[must_use]
    pub const fn is_next_above(self, other: Rank) -> bool {
        self.0 == other.0 + 1
    }

    /// Short display label: "A", "2".."10", "J", "Q", "K".
    #[must_use]
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[(self.0 - 1) as usize]
    }

    /// Iterate over all ranks, Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=Self::COUNT).map(Rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits, in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Get the suit's color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Unicode symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card: immutable rank/suit identity plus a mutable face-up flag.
///
/// Cards are created once at deal time and only relocated and flipped until
/// a new game resets the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up_card(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down.
    pub fn conceal(&mut self) {
        self.face_up = false;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
