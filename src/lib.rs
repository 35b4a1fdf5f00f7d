//! # patience-engine
//!
//! The move/selection engine for a cursor-driven Klondike patience game.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: terminal rendering, key binding, and menus are
//!    external collaborators. The engine exposes read accessors and result
//!    tags; the render layer draws from those.
//!
//! 2. **One event, one transition**: every operation processes a single
//!    input event to completion before the next is accepted. There is no
//!    background work and no mid-transaction suspension.
//!
//! 3. **Reversible transactions**: a pickup opens a move, a drop commits or
//!    rolls it back. A rejected drop leaves every zone container exactly as
//!    it was, and only committed moves enter the bounded undo history.
//!
//! ## Architecture
//!
//! - **Identity-based transfer**: cards carry deal-time ids; zone transfers
//!   match by id, never by rank/suit equality.
//!
//! - **Virtual carry**: held cards stay in their source zone while the
//!   cursor hovers targets; the move engine relocates them only on a legal
//!   drop. A foundation source alone is popped eagerly so the pile's next
//!   card shows underneath.
//!
//! ## Modules
//!
//! - `core`: cards, the deck source, positions, outcomes, RNG
//! - `zones`: tableau columns, foundation piles, stock/waste/draw-window
//! - `engine`: selection, cursor transitions, moves, undo, the game facade
//! - `leaderboard`: the JSON score store collaborator

pub mod core;
pub mod engine;
pub mod leaderboard;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, Deck, DeckRng, ExtendDir, NavDir, Outcome, Position, Rank, Suit,
};

pub use crate::zones::{
    Difficulty, DrawResult, FoundationPile, Foundations, StockPile, Tableau, TableauColumn,
};

pub use crate::engine::{Game, GameBuilder, HeldRun, Origin, Selection, UndoHistory};

pub use crate::leaderboard::{Leaderboard, LeaderboardError, ScoreEntry};
