//! Stock, waste, and the three-card draw window.
//!
//! The stock pile produces the single "active" playable card. In single-draw
//! (easy) mode the active card sits alone on the reserve slot; in three-draw
//! (hard) mode up to three cards are visible in a window and only the
//! rightmost occupied slot is playable.
//!
//! ## Invariants
//!
//! - The window shows at most three cards, compacted rightward with no gaps
//!   between occupied slots; the active card is always the rightmost.
//! - Recycling reverses the waste into the stock, so the most recently
//!   retired card is drawn first. Both modes recycle identically.
//! - Stock cards are face-down; cards become face-up when drawn and are
//!   concealed again when recycled.

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Draw-mode difficulty. Doubles as the leaderboard difficulty tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Single-card draw.
    Easy,
    /// Three-card draw, only the top card playable.
    Hard,
}

/// What a draw accomplished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawResult {
    /// At least one card is now visible.
    Drew,
    /// Stock and waste are both exhausted.
    NoCardsLeft,
}

/// The stock/waste engine.
///
/// Storage convention: `stock` keeps the next card to draw at the *end* of
/// the vector. Under this convention, recycling is a wholesale move of the
/// waste into the stock, which realises "reverse the waste": the most
/// recently wasted card is drawn first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPile {
    difficulty: Difficulty,
    stock: Vec<Card>,
    waste: Vec<Card>,
    /// Three-draw window, left to right. Hard mode only.
    window: [Option<Card>; 3],
    /// Single-draw reserve slot. Easy mode only.
    active_slot: Option<Card>,
    /// True once the first draw has happened. Gates stock pickup and
    /// stock-bound cursor movement.
    revealed: bool,
}

impl StockPile {
    /// Window width in three-draw mode.
    pub const WINDOW: usize = 3;

    /// Create a stock from cards in draw order (first element drawn first).
    #[must_use]
    pub fn new(difficulty: Difficulty, mut cards: Vec<Card>) -> Self {
        for card in &mut cards {
            card.conceal();
        }
        cards.reverse();
        Self {
            difficulty,
            stock: cards,
            waste: Vec::new(),
            window: [None, None, None],
            active_slot: None,
            revealed: false,
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// True once the first draw has happened.
    #[must_use]
    pub const fn revealed(&self) -> bool {
        self.revealed
    }

    /// Number of face-down cards remaining in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Number of retired cards in the waste.
    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// The visible window, left to right. Meaningful in hard mode only.
    #[must_use]
    pub const fn window(&self) -> &[Option<Card>; 3] {
        &self.window
    }

    /// The currently playable card, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Card> {
        match self.difficulty {
            Difficulty::Easy => self.active_slot.as_ref(),
            Difficulty::Hard => self.window.iter().rev().find_map(Option::as_ref),
        }
    }

    /// Slot index of the active card in hard mode.
    #[must_use]
    pub fn active_slot_index(&self) -> Option<usize> {
        match self.difficulty {
            Difficulty::Easy => None,
            Difficulty::Hard => self.window.iter().rposition(Option::is_some),
        }
    }

    /// True when no card can ever be produced again.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.stock.is_empty() && self.waste.is_empty() && self.active().is_none()
    }

    /// Check that a card id names the current active card.
    #[must_use]
    pub fn is_active(&self, id: crate::core::CardId) -> bool {
        self.active().is_some_and(|card| card.id() == id)
    }

    /// Draw per the current mode. Marks the first reveal as done.
    pub fn draw(&mut self) -> DrawResult {
        self.revealed = true;
        match self.difficulty {
            Difficulty::Easy => self.draw_single(),
            Difficulty::Hard => self.draw_three(),
        }
    }

    fn draw_single(&mut self) -> DrawResult {
        if let Some(mut retired) = self.active_slot.take() {
            retired.reveal();
            self.waste.push(retired);
        }
        match self.next_from_stock() {
            Some(card) => {
                self.active_slot = Some(card);
                DrawResult::Drew
            }
            None => DrawResult::NoCardsLeft,
        }
    }

    fn draw_three(&mut self) -> DrawResult {
        // Retire the window right to left so waste ordering matches the
        // single-draw semantics (active card retired last drawn, first out
        // on recycle).
        for slot in (0..Self::WINDOW).rev() {
            if let Some(card) = self.window[slot].take() {
                self.waste.push(card);
            }
        }
        for slot in 0..Self::WINDOW {
            match self.next_from_stock() {
                Some(card) => self.window[slot] = Some(card),
                None => break,
            }
        }
        self.refill_window();
        if self.active().is_none() {
            DrawResult::NoCardsLeft
        } else {
            DrawResult::Drew
        }
    }

    /// Remove and return the active card after a successful move consumed
    /// it. In hard mode the window compacts rightward and empty left slots
    /// backfill from the stock.
    pub fn consume_active(&mut self) -> Option<Card> {
        match self.difficulty {
            Difficulty::Easy => self.active_slot.take(),
            Difficulty::Hard => {
                let slot = self.active_slot_index()?;
                let card = self.window[slot].take();
                self.refill_window();
                card
            }
        }
    }

    /// Pop the next stock card, recycling the waste (once) if the stock is
    /// empty. Drawn cards come out face-up.
    fn next_from_stock(&mut self) -> Option<Card> {
        if self.stock.is_empty() && !self.waste.is_empty() {
            self.recycle();
        }
        let mut card = self.stock.pop()?;
        card.reveal();
        Some(card)
    }

    /// Reverse the waste into the stock. With the end-draws-first storage
    /// convention this is a wholesale move.
    fn recycle(&mut self) {
        debug_assert!(self.stock.is_empty());
        self.stock = std::mem::take(&mut self.waste);
        for card in &mut self.stock {
            card.conceal();
        }
    }

    /// Compact occupied window slots rightward, preserving relative order,
    /// then backfill empty left slots from the stock.
    fn refill_window(&mut self) {
        let visible: Vec<Card> = self.window.iter_mut().filter_map(Option::take).collect();
        let mut slot = Self::WINDOW;
        for card in visible.into_iter().rev() {
            slot -= 1;
            self.window[slot] = Some(card);
        }
        for slot in 0..Self::WINDOW {
            if self.window[slot].is_none() {
                match self.next_from_stock() {
                    Some(card) => self.window[slot] = Some(card),
                    None => break,
                }
            }
        }
    }
}
