//! The selection value: what the cursor addresses or holds.
//!
//! One `Selection` value owns everything about the pending interaction:
//! either the cursor is browsing a position, or a run is held with its
//! origin, its current hover target, and (for a foundation source) the one
//! card that was eagerly popped. No other component carries selection state.
//!
//! While held, tableau and stock cards stay physically in their source zone;
//! the hold is *virtual* and the move engine performs the actual relocation
//! at drop time. Only a foundation source is popped at pickup, so the pile's
//! next card shows underneath; that card rides along in `in_flight`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, CardId, Position};

/// Where a held run came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// A face-up run in a tableau column, from `row` to the column top.
    TableauRun {
        column: usize,
        row: usize,
        len: usize,
    },
    /// The active stock/draw-window card.
    StockHead,
    /// The top card of a foundation pile.
    Foundation { pile: usize },
}

impl Origin {
    /// The origin expressed as a cursor position. Dropping on this exact
    /// position cancels the move.
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Origin::TableauRun { column, row, .. } => Position::Tableau { column, row },
            Origin::StockHead => Position::StockHead,
            Origin::Foundation { pile } => Position::Foundation { pile },
        }
    }

    /// Number of cards in the held run.
    #[must_use]
    pub const fn run_len(self) -> usize {
        match self {
            Origin::TableauRun { len, .. } => len,
            Origin::StockHead | Origin::Foundation { .. } => 1,
        }
    }
}

/// A held run: origin, current hover target, and the in-flight card for a
/// foundation source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeldRun {
    pub origin: Origin,
    pub current: Position,
    /// Foundation-sourced card, eagerly popped at pickup.
    pub in_flight: Option<Card>,
    /// Ids of the held cards, bottom of the run first.
    pub cards: SmallVec<[CardId; 4]>,
}

impl HeldRun {
    /// Number of held cards.
    #[must_use]
    pub fn run_len(&self) -> usize {
        self.cards.len()
    }

    /// True for a single-card hold.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.cards.len() == 1
    }

    /// True when the hover target is back on the exact origin position.
    #[must_use]
    pub fn at_origin(&self) -> bool {
        self.current == self.origin.position()
    }
}

/// Current selection state: browsing a position, or holding a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    Browsing { pos: Position },
    Holding(HeldRun),
}

impl Selection {
    /// Start browsing at a position.
    #[must_use]
    pub const fn browsing(pos: Position) -> Self {
        Selection::Browsing { pos }
    }

    /// True while a run is held.
    #[must_use]
    pub const fn is_holding(&self) -> bool {
        matches!(self, Selection::Holding(_))
    }

    /// The position the cursor is visually at: the browse position, or the
    /// held run's hover target.
    #[must_use]
    pub fn cursor(&self) -> Position {
        match self {
            Selection::Browsing { pos } => *pos,
            Selection::Holding(held) => held.current,
        }
    }

    /// The held run, if any.
    #[must_use]
    pub fn held(&self) -> Option<&HeldRun> {
        match self {
            Selection::Browsing { .. } => None,
            Selection::Holding(held) => Some(held),
        }
    }
}
