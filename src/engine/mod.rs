//! The move/selection engine: selection state, cursor transitions, the
//! pickup/drop transaction, undo history, and the game facade.

pub mod cursor;
pub mod game;
pub mod history;
pub mod moves;
pub mod selection;

pub use game::{Game, GameBuilder};
pub use history::{Snapshot, UndoHistory};
pub use selection::{HeldRun, Origin, Selection};
