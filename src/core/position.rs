//! Zone addressing.
//!
//! `Position` is the single addressing scheme for every zone: no sentinel
//! rows or overloaded column indices. The browsing cursor addresses the
//! stock area as `StockHead` in both draw modes ("the one playable card");
//! `DrawWindow` positions address individual three-draw slots and appear in
//! read-only accessors for the render layer.

use serde::{Deserialize, Serialize};

/// Address of a cell in some zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// A tableau cell. When used as the browsing cursor, `row` is the start
    /// of the selected run, which extends to the top of the column.
    Tableau { column: usize, row: usize },
    /// The single active drawable card slot.
    StockHead,
    /// One of the three visible draw-window slots (three-card mode only).
    DrawWindow { slot: usize },
    /// A foundation pile.
    Foundation { pile: usize },
}

impl Position {
    /// Shorthand for a tableau position.
    #[must_use]
    pub const fn tableau(column: usize, row: usize) -> Self {
        Position::Tableau { column, row }
    }

    /// Shorthand for a foundation position.
    #[must_use]
    pub const fn foundation(pile: usize) -> Self {
        Position::Foundation { pile }
    }

    /// Check if this addresses any tableau cell.
    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, Position::Tableau { .. })
    }

    /// Check if this addresses the top row (stock area or a foundation).
    #[must_use]
    pub const fn is_top_row(self) -> bool {
        matches!(
            self,
            Position::StockHead | Position::DrawWindow { .. } | Position::Foundation { .. }
        )
    }
}

/// Horizontal cursor direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavDir {
    Left,
    Right,
}

impl NavDir {
    /// Signed column step: -1 for left, +1 for right.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            NavDir::Left => -1,
            NavDir::Right => 1,
        }
    }
}

/// Vertical cursor direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendDir {
    Up,
    Down,
}
