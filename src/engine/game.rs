//! The game facade: construction, dealing, drawing, undo, win detection,
//! and the read-only accessors the render layer consumes.
//!
//! One `Game` instance exclusively owns every zone container. Each public
//! operation is a single atomic state transition: it runs to completion,
//! records its `Outcome`, and returns it. Cursor movement lives in
//! `engine::cursor`, the pickup/drop transaction in `engine::moves`.

use crate::core::{Deck, Outcome, Position};
use crate::leaderboard::ScoreEntry;
use crate::zones::{Difficulty, DrawResult, Foundations, StockPile, Tableau};

use super::history::{Snapshot, UndoHistory};
use super::selection::Selection;

/// Builder for a new game.
///
/// ## Usage
///
/// ```
/// use patience_engine::engine::GameBuilder;
/// use patience_engine::zones::Difficulty;
///
/// let game = GameBuilder::new().difficulty(Difficulty::Hard).build(42);
/// assert_eq!(game.move_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    difficulty: Difficulty,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw-mode difficulty.
    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Shuffle a standard deck with `seed` and deal it.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        Game::deal(self.difficulty, &Deck::shuffled(seed))
    }

    /// Deal an explicit deck (the deck-source interface).
    #[must_use]
    pub fn build_with_deck(self, deck: &Deck) -> Game {
        Game::deal(self.difficulty, deck)
    }
}

/// A single-player patience game in progress.
pub struct Game {
    pub(crate) tableau: Tableau,
    pub(crate) foundations: Foundations,
    pub(crate) stock: StockPile,
    pub(crate) selection: Selection,
    pub(crate) history: UndoHistory,
    pub(crate) move_count: u32,
    pub(crate) game_over: bool,
    pub(crate) last_outcome: Outcome,
}

impl Game {
    /// Cards dealt to the tableau by the triangular deal.
    pub const TABLEAU_DEAL: usize = 28;

    /// Deal a full deck: the triangular tableau (1..=7 cards per column,
    /// only the last card of each column face-up) and the remainder into
    /// the stock. Card ids are assigned here, in deal order.
    fn deal(difficulty: Difficulty, deck: &Deck) -> Game {
        use crate::core::{Card, CardId};

        let pairs = deck.pairs();
        let mut next_id = 0u8;
        let mut take = |face_up: bool| {
            let (rank, suit) = pairs[next_id as usize];
            let id = CardId::new(next_id);
            next_id += 1;
            if face_up {
                Card::face_up_card(id, rank, suit)
            } else {
                Card::new(id, rank, suit)
            }
        };

        let mut tableau = Tableau::new();
        for column in 0..Tableau::COLUMNS {
            for row in 0..=column {
                tableau.column_mut(column).push(take(row == column));
            }
        }

        let stock_cards: Vec<Card> = (0..pairs.len() - Self::TABLEAU_DEAL)
            .map(|_| take(false))
            .collect();

        let cursor = Self::initial_cursor(&tableau);
        Game {
            tableau,
            foundations: Foundations::new(),
            stock: StockPile::new(difficulty, stock_cards),
            selection: Selection::browsing(cursor),
            history: UndoHistory::new(),
            move_count: 0,
            game_over: false,
            last_outcome: Outcome::Cursor,
        }
    }

    /// Default cursor: `Tableau(1,1)` when column 1 holds at least two
    /// cards, else the top of the first non-empty column, else
    /// `Tableau(0,0)`. Used at deal time and after an undo.
    pub(crate) fn initial_cursor(tableau: &Tableau) -> Position {
        if tableau.column(1).len() >= 2 {
            return Position::tableau(1, 1);
        }
        for column in 0..Tableau::COLUMNS {
            if !tableau.column(column).is_empty() {
                return Position::tableau(column, tableau.column(column).top_row());
            }
        }
        Position::tableau(0, 0)
    }

    // === Draw ===

    /// Draw from the stock per the current difficulty.
    ///
    /// Rejected while a pickup is held. Draws advance the move counter and
    /// park the cursor on the stock area, but are not undoable.
    pub fn draw(&mut self) -> Outcome {
        if self.game_over {
            return self.finish(Outcome::GameOver);
        }
        if self.selection.is_holding() {
            return self.finish(Outcome::MoveInProgress);
        }

        self.move_count += 1;
        let result = self.stock.draw();
        self.selection = Selection::browsing(Position::StockHead);
        match result {
            DrawResult::Drew => self.finish(Outcome::Drew),
            DrawResult::NoCardsLeft => self.finish(Outcome::NoCardsLeft),
        }
    }

    // === Undo ===

    /// Undo the most recent completed move.
    ///
    /// Fails with `MoveInProgress` while a pickup is held (cancel first)
    /// and `NothingToUndo` on empty history. Restores every zone and the
    /// move counter, and resets the cursor to the deal-time default.
    pub fn undo(&mut self) -> Outcome {
        if self.game_over {
            return self.finish(Outcome::GameOver);
        }
        if self.selection.is_holding() {
            return self.finish(Outcome::MoveInProgress);
        }
        match self.history.pop() {
            None => self.finish(Outcome::NothingToUndo),
            Some(snapshot) => {
                self.restore(snapshot);
                self.finish(Outcome::Undone)
            }
        }
    }

    // === Win detection ===

    /// Win test, run after every successful move. Idempotent: once the
    /// game is over no further state changes happen.
    pub(crate) fn check_win(&mut self) -> bool {
        if self.foundations.all_complete() {
            self.game_over = true;
        }
        self.game_over
    }

    /// The score record for the leaderboard collaborator, available once
    /// the game is won. The caller supplies the timestamp; the engine
    /// never reads the clock.
    #[must_use]
    pub fn score_entry(&self, timestamp: impl Into<String>) -> Option<ScoreEntry> {
        self.game_over.then(|| ScoreEntry {
            moves: self.move_count,
            timestamp: timestamp.into(),
            difficulty: self.stock.difficulty(),
        })
    }

    // === Snapshots ===

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            tableau: self.tableau.clone(),
            foundations: self.foundations.clone(),
            stock: self.stock.clone(),
            move_count: self.move_count,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.tableau = snapshot.tableau;
        self.foundations = snapshot.foundations;
        self.stock = snapshot.stock;
        self.move_count = snapshot.move_count;
        self.selection = Selection::browsing(Self::initial_cursor(&self.tableau));
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.last_outcome = outcome;
        outcome
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.stock.difficulty()
    }

    #[must_use]
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    #[must_use]
    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    #[must_use]
    pub fn stock(&self) -> &StockPile {
        &self.stock
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Where the active stock card sits, for highlighting: the stock head
    /// in single-draw mode, the occupied window slot in three-draw mode.
    #[must_use]
    pub fn active_position(&self) -> Option<Position> {
        self.stock.active()?;
        Some(match self.stock.active_slot_index() {
            Some(slot) => Position::DrawWindow { slot },
            None => Position::StockHead,
        })
    }

    /// Outcome of the most recent operation.
    #[must_use]
    pub fn last_outcome(&self) -> Outcome {
        self.last_outcome
    }

    /// Number of undos currently available.
    #[must_use]
    pub fn undos_available(&self) -> usize {
        self.history.len()
    }
}
