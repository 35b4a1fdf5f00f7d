//! Cursor movement: navigation and run extension.
//!
//! The adjacency map has two rows. The tableau row moves between columns;
//! the top row moves along `[stock, foundation 0..3]`. `extend` hops
//! between the rows through a fixed column mapping: columns 0-2 face the
//! stock area, columns 3-6 face foundations 0-3.
//!
//! While browsing, navigation skips empty columns and piles. While holding,
//! the same inputs *carry* the selection: the hover target moves to the
//! adjacent cell (including empty tableau columns, which a King may need),
//! and a target that cannot legally hold the run leaves the state untouched.
//! Carrying never relocates cards; the move engine does that at drop time.

use crate::core::{ExtendDir, NavDir, Outcome, Position};
use crate::zones::{Foundations, Tableau};

use super::game::Game;
use super::selection::{HeldRun, Origin, Selection};

/// Top-row slot count: the stock area plus the four foundations.
const TOP_ROW_SLOTS: usize = Foundations::PILES + 1;

impl Game {
    /// Move the cursor (or carry the held run) left or right.
    pub fn navigate(&mut self, dir: NavDir) -> Outcome {
        if self.game_over {
            return self.finish(Outcome::GameOver);
        }
        match self.selection.clone() {
            Selection::Browsing { pos } => self.navigate_browsing(pos, dir),
            Selection::Holding(held) => self.navigate_carry(&held, dir),
        }
    }

    /// Extend/shrink a browsing run, or hop/carry between the tableau and
    /// the top row.
    pub fn extend(&mut self, dir: ExtendDir) -> Outcome {
        if self.game_over {
            return self.finish(Outcome::GameOver);
        }
        match self.selection.clone() {
            Selection::Browsing { pos } => self.extend_browsing(pos, dir),
            Selection::Holding(held) => self.extend_carry(&held, dir),
        }
    }

    /// The stock area can take the cursor only after a reveal has happened
    /// and while an active card exists.
    pub(crate) fn stock_selectable(&self) -> bool {
        self.stock.revealed() && self.stock.active().is_some()
    }

    // === Browsing ===

    fn navigate_browsing(&mut self, pos: Position, dir: NavDir) -> Outcome {
        let step = dir.step();
        let next = match pos {
            Position::Tableau { column, .. } => self
                .tableau
                .next_occupied_column(column, step)
                .map(|target| Position::tableau(target, self.tableau.column(target).top_row())),
            Position::StockHead | Position::DrawWindow { .. } => match dir {
                NavDir::Left => None,
                NavDir::Right => self
                    .foundations
                    .first_occupied_pile()
                    .map(Position::foundation),
            },
            Position::Foundation { pile } => {
                match self.foundations.next_occupied_pile(pile, step) {
                    Some(target) => Some(Position::foundation(target)),
                    None if dir == NavDir::Left && self.stock_selectable() => {
                        Some(Position::StockHead)
                    }
                    None => None,
                }
            }
        };
        if let Some(next) = next {
            self.selection = Selection::browsing(next);
        }
        self.finish(Outcome::Cursor)
    }

    fn extend_browsing(&mut self, pos: Position, dir: ExtendDir) -> Outcome {
        let next = match (pos, dir) {
            (Position::Tableau { column, row }, ExtendDir::Up) => {
                let col = self.tableau.column(column);
                if row > 0 && col.card(row - 1).is_some_and(|card| card.face_up()) {
                    // Grow the run downward in row index: prepend the next
                    // face-up card above the run start.
                    Some(Position::tableau(column, row - 1))
                } else {
                    self.top_row_hop(column)
                }
            }
            (Position::Tableau { column, row }, ExtendDir::Down) => {
                let col = self.tableau.column(column);
                // Shrink a multi-card run from its bottom end.
                (!col.is_empty() && row < col.top_row())
                    .then(|| Position::tableau(column, row + 1))
            }
            (Position::StockHead | Position::DrawWindow { .. }, ExtendDir::Down) => {
                Some(self.tableau_landing(0))
            }
            (Position::Foundation { pile }, ExtendDir::Down) => {
                Some(self.tableau_landing(pile + 3))
            }
            (_, ExtendDir::Up) => None,
        };
        if let Some(next) = next {
            self.selection = Selection::browsing(next);
        }
        self.finish(Outcome::Cursor)
    }

    /// Browsing hop from a tableau column to its mapped top-row zone.
    fn top_row_hop(&self, column: usize) -> Option<Position> {
        if column >= 3 {
            let pile = column - 3;
            if !self.foundations.pile(pile).is_empty() {
                return Some(Position::foundation(pile));
            }
        }
        self.stock_selectable().then_some(Position::StockHead)
    }

    /// Cursor landing when dropping down into a tableau column: its top
    /// card, or the empty cell of a bare column.
    fn tableau_landing(&self, column: usize) -> Position {
        let col = self.tableau.column(column);
        if col.is_empty() {
            Position::tableau(column, 0)
        } else {
            Position::tableau(column, col.top_row())
        }
    }

    // === Carrying ===

    fn navigate_carry(&mut self, held: &HeldRun, dir: NavDir) -> Outcome {
        let step = dir.step();
        let target = match held.current {
            Position::Tableau { column, .. } => {
                let next = column as isize + step;
                (0..Tableau::COLUMNS as isize)
                    .contains(&next)
                    .then(|| self.carry_tableau_target(held, next as usize))
            }
            pos => {
                let slot = top_row_slot(pos) as isize + step;
                if (0..TOP_ROW_SLOTS as isize).contains(&slot) {
                    carry_top_row_target(held, slot as usize)
                } else {
                    None
                }
            }
        };
        self.adopt_carry_target(target)
    }

    fn extend_carry(&mut self, held: &HeldRun, dir: ExtendDir) -> Outcome {
        let target = match (held.current, dir) {
            (Position::Tableau { column, .. }, ExtendDir::Up) => {
                if column >= 3 {
                    carry_top_row_target(held, column - 3 + 1)
                } else {
                    carry_top_row_target(held, 0)
                }
            }
            (Position::StockHead | Position::DrawWindow { .. }, ExtendDir::Down) => {
                Some(self.carry_tableau_target(held, 0))
            }
            (Position::Foundation { pile }, ExtendDir::Down) => {
                Some(self.carry_tableau_target(held, pile + 3))
            }
            _ => None,
        };
        self.adopt_carry_target(target)
    }

    /// Hover target for carrying the run over a tableau column. The origin
    /// column re-adopts the exact origin position, so a drop there cancels.
    fn carry_tableau_target(&self, held: &HeldRun, column: usize) -> Position {
        match held.origin {
            Origin::TableauRun { column: origin, row, .. } if origin == column => {
                Position::tableau(origin, row)
            }
            _ => Position::tableau(column, self.tableau.column(column).len()),
        }
    }

    fn adopt_carry_target(&mut self, target: Option<Position>) -> Outcome {
        if let Some(target) = target {
            if let Selection::Holding(held) = &mut self.selection {
                held.current = target;
            }
        }
        self.finish(Outcome::Cursor)
    }
}

/// Index of a top-row position in `[stock, F0..F3]`.
fn top_row_slot(pos: Position) -> usize {
    match pos {
        Position::StockHead | Position::DrawWindow { .. } => 0,
        Position::Foundation { pile } => pile + 1,
        Position::Tableau { .. } => unreachable!("tableau positions are not in the top row"),
    }
}

/// Hover target for a top-row slot, if the held run may rest there: the
/// stock head takes back only its own card, a foundation takes a single
/// card of any provenance.
fn carry_top_row_target(held: &HeldRun, slot: usize) -> Option<Position> {
    if slot == 0 {
        (held.origin == Origin::StockHead).then_some(Position::StockHead)
    } else {
        held.is_single().then_some(Position::foundation(slot - 1))
    }
}
