//! The pickup/drop transaction.
//!
//! One call per input event. The first `toggle_pickup_or_drop` while
//! browsing validates and starts a hold; the second evaluates the drop
//! against the source/target legality table and either completes the
//! relocation or rolls everything back.
//!
//! ## Rollback contract
//!
//! A rejected or cancelled drop must leave every zone container exactly as
//! it was before the pickup. A hold is virtual (tableau and stock cards
//! never leave their zone while held), so the only thing to restore is
//! the foundation card popped eagerly at pickup. The snapshot pushed at
//! pickup is discarded on any non-completed drop, so aborted moves are
//! never undoable.

use smallvec::smallvec;

use crate::core::{Card, Outcome, Position};

use super::game::Game;
use super::selection::{HeldRun, Origin, Selection};

impl Game {
    /// Pick up the browsed selection, or drop the held one.
    pub fn toggle_pickup_or_drop(&mut self) -> Outcome {
        if self.game_over {
            return self.finish(Outcome::GameOver);
        }
        match self.selection.clone() {
            Selection::Browsing { pos } => self.pickup(pos),
            Selection::Holding(held) => self.drop_held(held),
        }
    }

    /// Cancel a held selection, restoring its origin exactly.
    pub fn cancel(&mut self) -> Outcome {
        if self.game_over {
            return self.finish(Outcome::GameOver);
        }
        match self.selection.clone() {
            Selection::Browsing { .. } => self.finish(Outcome::Cursor),
            Selection::Holding(mut held) => {
                self.abort_hold(&mut held);
                self.finish(Outcome::Cancelled)
            }
        }
    }

    // === Phase 1: pickup ===

    fn pickup(&mut self, pos: Position) -> Outcome {
        match pos {
            Position::Tableau { column, row } => {
                if !self.tableau.column(column).run_is_face_up(row) {
                    return self.finish(Outcome::CannotPickUp);
                }
                let cards = self.tableau.column(column).cards()[row..]
                    .iter()
                    .map(Card::id)
                    .collect();
                let len = self.tableau.column(column).len() - row;
                self.history.push(self.snapshot());
                self.selection = Selection::Holding(HeldRun {
                    origin: Origin::TableauRun { column, row, len },
                    current: pos,
                    in_flight: None,
                    cards,
                });
                self.finish(Outcome::PickedUp)
            }
            Position::StockHead | Position::DrawWindow { .. } => {
                if !self.stock.revealed() {
                    return self.finish(Outcome::CannotPickUp);
                }
                let Some(card) = self.stock.active() else {
                    return self.finish(Outcome::CannotPickUp);
                };
                let id = card.id();
                self.history.push(self.snapshot());
                self.selection = Selection::Holding(HeldRun {
                    origin: Origin::StockHead,
                    current: Position::StockHead,
                    in_flight: None,
                    cards: smallvec![id],
                });
                self.finish(Outcome::PickedUp)
            }
            Position::Foundation { pile } => {
                if self.foundations.pile(pile).is_empty() {
                    return self.finish(Outcome::CannotPickUp);
                }
                self.history.push(self.snapshot());
                // Eager removal: the pile's next card shows underneath
                // while its top rides in the in-flight slot.
                let card = self
                    .foundations
                    .pile_mut(pile)
                    .pop()
                    .expect("pile checked non-empty");
                let id = card.id();
                self.selection = Selection::Holding(HeldRun {
                    origin: Origin::Foundation { pile },
                    current: pos,
                    in_flight: Some(card),
                    cards: smallvec![id],
                });
                self.finish(Outcome::PickedUp)
            }
        }
    }

    // === Phase 2: drop ===

    fn drop_held(&mut self, mut held: HeldRun) -> Outcome {
        if held.at_origin() {
            self.abort_hold(&mut held);
            return self.finish(Outcome::SelectionCleared);
        }

        let placed = match held.current {
            Position::Foundation { pile } => self.try_place_on_foundation(&mut held, pile),
            Position::Tableau { column, .. } => self.try_place_on_tableau(&mut held, column),
            // A non-stock-origin run can never hover the stock head, and a
            // stock-origin hold there is the origin itself.
            Position::StockHead | Position::DrawWindow { .. } => false,
        };

        if !placed {
            self.abort_hold(&mut held);
            return self.finish(Outcome::IllegalPlacement);
        }

        let target = match held.current {
            Position::Foundation { pile } => Position::foundation(pile),
            Position::Tableau { column, .. } => Position::tableau(
                column,
                self.tableau.column(column).len() - held.origin.run_len(),
            ),
            Position::StockHead | Position::DrawWindow { .. } => {
                unreachable!("placement targets are tableau or foundation")
            }
        };
        self.move_count += 1;
        self.selection = Selection::browsing(target);
        if self.check_win() {
            return self.finish(Outcome::Won {
                moves: self.move_count,
            });
        }
        self.finish(Outcome::Moved)
    }

    /// Foundation drop: Ace on an empty pile, or same suit ascending by
    /// one. Tableau sources must be single cards.
    fn try_place_on_foundation(&mut self, held: &mut HeldRun, pile: usize) -> bool {
        match held.origin {
            Origin::TableauRun { column, row, .. } => {
                if !held.is_single() {
                    return false;
                }
                let Some(card) = self.tableau.column(column).card(row) else {
                    return false;
                };
                if !self.foundations.pile(pile).accepts(card) {
                    return false;
                }
                let mut run = self.tableau.column_mut(column).take_run(row);
                let card = run.pop().expect("held run is non-empty");
                self.foundations.pile_mut(pile).push(card);
                self.tableau.column_mut(column).flip_exposed();
                true
            }
            Origin::StockHead => {
                let Some(card) = self.stock.active() else {
                    return false;
                };
                if !self.foundations.pile(pile).accepts(card) {
                    return false;
                }
                let card = self
                    .stock
                    .consume_active()
                    .expect("active card checked above");
                self.foundations.pile_mut(pile).push(card);
                true
            }
            Origin::Foundation { .. } => {
                let Some(card) = held.in_flight.as_ref() else {
                    return false;
                };
                if !self.foundations.pile(pile).accepts(card) {
                    return false;
                }
                let card = held.in_flight.take().expect("in-flight card present");
                self.foundations.pile_mut(pile).push(card);
                true
            }
        }
    }

    /// Tableau drop: a King run onto an empty column, or an
    /// opposite-color run one rank below a face-up top card.
    fn try_place_on_tableau(&mut self, held: &mut HeldRun, column: usize) -> bool {
        match held.origin {
            Origin::TableauRun { column: source, row, .. } => {
                debug_assert_ne!(source, column, "same-column drop is a cancel");
                let Some(bottom) = self.tableau.column(source).card(row) else {
                    return false;
                };
                if !self.tableau.column(column).accepts(bottom) {
                    return false;
                }
                let run = self.tableau.column_mut(source).take_run(row);
                self.tableau.column_mut(column).push_run(run);
                self.tableau.column_mut(source).flip_exposed();
                true
            }
            Origin::StockHead => {
                let Some(card) = self.stock.active() else {
                    return false;
                };
                if !self.tableau.column(column).accepts(card) {
                    return false;
                }
                let card = self
                    .stock
                    .consume_active()
                    .expect("active card checked above");
                self.tableau.column_mut(column).push(card);
                true
            }
            Origin::Foundation { .. } => {
                let Some(card) = held.in_flight.as_ref() else {
                    return false;
                };
                if !self.tableau.column(column).accepts(card) {
                    return false;
                }
                let card = held.in_flight.take().expect("in-flight card present");
                self.tableau.column_mut(column).push(card);
                true
            }
        }
    }

    /// Undo everything a pickup did: restore the in-flight foundation card,
    /// discard the pickup snapshot, return to browsing the origin.
    fn abort_hold(&mut self, held: &mut HeldRun) {
        if let Some(card) = held.in_flight.take() {
            if let Origin::Foundation { pile } = held.origin {
                self.foundations.pile_mut(pile).push(card);
            }
        }
        self.history.discard_latest();
        self.selection = Selection::browsing(held.origin.position());
    }
}
