//! The seven tableau columns.
//!
//! Each column is an ordered pile, bottom to top. Invariant: the face-up
//! cards form a suffix (every card below the topmost face-up run is
//! face-down), and whoever removes cards from a column flips the newly
//! exposed top card face-up exactly once.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Color, Rank};

/// One tableau column, ordered bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauColumn {
    cards: Vec<Card>,
}

impl TableauColumn {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The card at `row`, if in bounds.
    #[must_use]
    pub fn card(&self, row: usize) -> Option<&Card> {
        self.cards.get(row)
    }

    /// Row index of the top card. Panics on an empty column.
    #[must_use]
    pub fn top_row(&self) -> usize {
        assert!(!self.cards.is_empty(), "Empty column has no top row");
        self.cards.len() - 1
    }

    /// Check whether every card from `row` to the top is face-up.
    ///
    /// This is the pickup test for a run starting at `row`. False when the
    /// column is empty or `row` is out of bounds.
    #[must_use]
    pub fn run_is_face_up(&self, row: usize) -> bool {
        if row >= self.cards.len() {
            return false;
        }
        self.cards[row..].iter().all(Card::face_up)
    }

    /// Check whether `incoming` (the bottom card of a run) may be placed on
    /// this column: an empty column takes a King; otherwise the top card
    /// must be face-up, of the opposite color, and one rank above.
    #[must_use]
    pub fn accepts(&self, incoming: &Card) -> bool {
        match self.top() {
            None => incoming.rank() == Rank::KING,
            Some(top) => {
                top.face_up()
                    && opposite_colors(top.color(), incoming.color())
                    && top.rank().is_next_above(incoming.rank())
            }
        }
    }

    /// Append a single card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append a run of cards on top, preserving order.
    pub fn push_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Remove and return the run from `row` to the top.
    ///
    /// Panics if `row` is out of bounds; callers validate the run first.
    pub fn take_run(&mut self, row: usize) -> Vec<Card> {
        assert!(row < self.cards.len(), "Run start out of bounds");
        self.cards.split_off(row)
    }

    /// Flip the newly exposed top card face-up, if it was face-down.
    ///
    /// Returns true when a flip happened. Called by whoever removed cards
    /// from this column.
    pub fn flip_exposed(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.face_up() => {
                top.reveal();
                true
            }
            _ => false,
        }
    }
}

const fn opposite_colors(a: Color, b: Color) -> bool {
    !matches!(
        (a, b),
        (Color::Red, Color::Red) | (Color::Black, Color::Black)
    )
}

/// The seven tableau columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    columns: Vec<TableauColumn>,
}

impl Tableau {
    /// Number of columns.
    pub const COLUMNS: usize = 7;

    /// Create seven empty columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: (0..Self::COLUMNS).map(|_| TableauColumn::new()).collect(),
        }
    }

    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[TableauColumn] {
        &self.columns
    }

    /// A single column. Panics out of bounds.
    #[must_use]
    pub fn column(&self, index: usize) -> &TableauColumn {
        &self.columns[index]
    }

    /// Mutable access to a single column. Panics out of bounds.
    pub fn column_mut(&mut self, index: usize) -> &mut TableauColumn {
        &mut self.columns[index]
    }

    /// Find the nearest non-empty column strictly beyond `from` in the
    /// direction of `step` (-1 or +1).
    #[must_use]
    pub fn next_occupied_column(&self, from: usize, step: isize) -> Option<usize> {
        let mut candidate = from as isize;
        loop {
            candidate += step;
            if !(0..Self::COLUMNS as isize).contains(&candidate) {
                return None;
            }
            if !self.columns[candidate as usize].is_empty() {
                return Some(candidate as usize);
            }
        }
    }

    /// Total number of cards across all columns.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(TableauColumn::len).sum()
    }
}
