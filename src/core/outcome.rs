//! Operation outcomes surfaced to the input/render layer.
//!
//! Every engine operation completes locally and reports one of these tags;
//! nothing here is a fatal error. The render layer displays `message()`
//! when present and otherwise just redraws from the accessors.

use serde::{Deserialize, Serialize};

/// Result of a single engine operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The cursor or held selection moved (or the input had nowhere to go).
    Cursor,
    /// A pickup was validated; a selection is now held.
    PickedUp,
    /// A drop completed and the move counter advanced.
    Moved,
    /// The winning move was just completed.
    Won { moves: u32 },
    /// A held selection was dropped back onto its origin.
    SelectionCleared,
    /// A held selection was cancelled explicitly.
    Cancelled,
    /// Cards were drawn from the stock.
    Drew,
    /// The most recent move was undone.
    Undone,
    /// The addressed source is empty, face-down, or inaccessible.
    CannotPickUp,
    /// The drop violated the placement rules; state was rolled back.
    IllegalPlacement,
    /// Stock and waste are both exhausted.
    NoCardsLeft,
    /// The operation needs the pending pickup finished or cancelled first.
    MoveInProgress,
    /// Undo history is empty.
    NothingToUndo,
    /// The game is over; no further moves are accepted.
    GameOver,
}

impl Outcome {
    /// Check if this outcome reports a rejected operation.
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            Outcome::CannotPickUp
                | Outcome::IllegalPlacement
                | Outcome::NoCardsLeft
                | Outcome::MoveInProgress
                | Outcome::NothingToUndo
                | Outcome::GameOver
        )
    }

    /// Human-readable message for display, if this outcome carries one.
    #[must_use]
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::Cursor | Outcome::PickedUp | Outcome::Moved | Outcome::Drew => None,
            Outcome::Won { moves } => Some(format!("Congratulations! You won in {moves} moves!")),
            Outcome::SelectionCleared => Some("Selection cleared.".to_string()),
            Outcome::Cancelled => Some("Move cancelled.".to_string()),
            Outcome::Undone => Some("Move undone.".to_string()),
            Outcome::CannotPickUp => Some("That cannot be picked up.".to_string()),
            Outcome::IllegalPlacement => Some("That card cannot be placed there.".to_string()),
            Outcome::NoCardsLeft => Some("No cards left to draw.".to_string()),
            Outcome::MoveInProgress => {
                Some("Finish or cancel the current move first.".to_string())
            }
            Outcome::NothingToUndo => Some("No moves to undo.".to_string()),
            Outcome::GameOver => Some("The game is over.".to_string()),
        }
    }
}
