//! Move legality tests driven entirely through the public, cursor-based
//! API, using rigged decks fed through the deck-source interface.
//!
//! Deal order: column `c` receives deck indices `c(c+1)/2 ..= c(c+1)/2 + c`
//! (the last one face-up), the stock draws indices 28, 29, ... in order.

use patience_engine::{
    Deck, ExtendDir, GameBuilder, NavDir, Outcome, Position, Rank, Suit,
};

/// A standard deck with specific cards swapped into specific deal slots.
fn deck_with(overrides: &[(usize, (Rank, Suit))]) -> Deck {
    let mut pairs = Deck::standard().pairs().to_vec();
    for &(slot, wanted) in overrides {
        let from = pairs
            .iter()
            .position(|&pair| pair == wanted)
            .expect("card exists in a standard deck");
        pairs.swap(slot, from);
    }
    Deck::from_pairs(&pairs)
}

fn card(rank: u8, suit: Suit) -> (Rank, Suit) {
    (Rank::new(rank), suit)
}

/// Red 5 from column 0 onto black 6 on column 1.
#[test]
fn tableau_to_tableau_accepts_alternating_descending() {
    let deck = deck_with(&[(0, card(5, Suit::Hearts)), (2, card(6, Suit::Spades))]);
    let mut game = GameBuilder::new().build_with_deck(&deck);

    assert_eq!(game.selection().cursor(), Position::tableau(1, 1));
    game.navigate(NavDir::Left);
    assert_eq!(game.selection().cursor(), Position::tableau(0, 0));

    assert_eq!(game.toggle_pickup_or_drop(), Outcome::PickedUp);
    game.navigate(NavDir::Right);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::Moved);

    assert!(game.tableau().column(0).is_empty());
    let column = game.tableau().column(1);
    assert_eq!(column.len(), 3);
    assert_eq!(column.top().unwrap().rank(), Rank::new(5));
    assert_eq!(column.top().unwrap().suit(), Suit::Hearts);
    // The buried column-1 card was not the source; it stays face-down
    assert!(!column.card(0).unwrap().face_up());
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.selection().cursor(), Position::tableau(1, 2));
}

/// 5 dropped onto 9: rejected with zero state mutation.
#[test]
fn tableau_to_tableau_rejects_rank_gap() {
    let deck = deck_with(&[(2, card(5, Suit::Hearts)), (5, card(9, Suit::Diamonds))]);
    let mut game = GameBuilder::new().build_with_deck(&deck);
    let before = game.tableau().clone();

    assert_eq!(game.toggle_pickup_or_drop(), Outcome::PickedUp);
    game.navigate(NavDir::Right);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::IllegalPlacement);

    assert_eq!(game.tableau(), &before);
    assert_eq!(game.selection().cursor(), Position::tableau(1, 1));
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.undos_available(), 0);
}

/// Same-color drop is rejected even with the right rank step.
#[test]
fn tableau_to_tableau_rejects_same_color() {
    let deck = deck_with(&[(2, card(5, Suit::Hearts)), (5, card(6, Suit::Diamonds))]);
    let mut game = GameBuilder::new().build_with_deck(&deck);
    let before = game.tableau().clone();

    game.toggle_pickup_or_drop();
    game.navigate(NavDir::Right);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::IllegalPlacement);
    assert_eq!(game.tableau(), &before);
}

/// Ace from the tableau up to a foundation, then back down onto the
/// newly exposed deuce.
#[test]
fn tableau_ace_to_foundation_and_back() {
    let deck = deck_with(&[(9, card(1, Suit::Diamonds)), (8, card(2, Suit::Clubs))]);
    let mut game = GameBuilder::new().build_with_deck(&deck);

    game.navigate(NavDir::Right);
    game.navigate(NavDir::Right);
    assert_eq!(game.selection().cursor(), Position::tableau(3, 3));

    assert_eq!(game.toggle_pickup_or_drop(), Outcome::PickedUp);
    game.extend(ExtendDir::Up);
    assert_eq!(game.selection().cursor(), Position::foundation(0));
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::Moved);

    let pile = game.foundations().pile(0);
    assert_eq!(pile.len(), 1);
    assert_eq!(pile.top().unwrap().rank(), Rank::ACE);
    // The card underneath the moved Ace flipped face-up
    let column = game.tableau().column(3);
    assert_eq!(column.len(), 3);
    assert!(column.top().unwrap().face_up());
    assert_eq!(column.top().unwrap().rank(), Rank::new(2));

    // Foundation top back down: Ace onto the black 2
    assert_eq!(game.selection().cursor(), Position::foundation(0));
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::PickedUp);
    game.extend(ExtendDir::Down);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::Moved);

    assert!(game.foundations().pile(0).is_empty());
    let column = game.tableau().column(3);
    assert_eq!(column.len(), 4);
    assert_eq!(column.top().unwrap().rank(), Rank::ACE);
    assert_eq!(game.move_count(), 2);
}

/// Stock to foundation: Ace, then the deuce, then a suit-mismatched card
/// that must leave everything untouched.
#[test]
fn stock_to_foundation_builds_and_rejects() {
    let deck = deck_with(&[
        (28, card(1, Suit::Spades)),
        (29, card(2, Suit::Spades)),
        (30, card(3, Suit::Hearts)),
    ]);
    let mut game = GameBuilder::new().build_with_deck(&deck);

    // A♠
    assert_eq!(game.draw(), Outcome::Drew);
    assert_eq!(game.selection().cursor(), Position::StockHead);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::PickedUp);
    game.navigate(NavDir::Right);
    assert_eq!(game.selection().cursor(), Position::foundation(0));
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::Moved);
    assert_eq!(game.foundations().pile(0).len(), 1);
    assert!(game.stock().active().is_none());

    // 2♠
    game.draw();
    game.toggle_pickup_or_drop();
    game.navigate(NavDir::Right);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::Moved);
    assert_eq!(game.foundations().pile(0).len(), 2);

    // 3♥: suit mismatch
    game.draw();
    let stock_before = game.stock().clone();
    game.toggle_pickup_or_drop();
    game.navigate(NavDir::Right);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::IllegalPlacement);

    assert_eq!(game.foundations().pile(0).len(), 2);
    assert_eq!(game.stock(), &stock_before);
    assert_eq!(game.selection().cursor(), Position::StockHead);
    assert_eq!(game.undos_available(), 0);
}

/// A King run carried onto an emptied column; a lesser run rejected.
#[test]
fn king_rule_on_empty_column() {
    // Column 0 holds a red 5 that empties itself onto column 1's black 6,
    // column 2's top is a King.
    let deck = deck_with(&[
        (0, card(5, Suit::Hearts)),
        (2, card(6, Suit::Spades)),
        (5, card(13, Suit::Diamonds)),
    ]);
    let mut game = GameBuilder::new().build_with_deck(&deck);

    // Empty column 0
    game.navigate(NavDir::Left);
    game.toggle_pickup_or_drop();
    game.navigate(NavDir::Right);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::Moved);
    assert!(game.tableau().column(0).is_empty());

    // King from column 2 onto the empty column 0
    game.navigate(NavDir::Right);
    assert_eq!(game.selection().cursor(), Position::tableau(2, 2));
    game.toggle_pickup_or_drop();
    game.navigate(NavDir::Left);
    game.navigate(NavDir::Left);
    assert_eq!(game.selection().cursor(), Position::tableau(0, 0));
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::Moved);

    assert_eq!(game.tableau().column(0).len(), 1);
    assert_eq!(
        game.tableau().column(0).top().unwrap().rank(),
        Rank::KING
    );
    // Column 2's newly exposed card flipped
    assert!(game.tableau().column(2).top().unwrap().face_up());
}

/// The carry refuses to hover a multi-card run over the top row, so a
/// multi-card foundation drop is unreachable from the cursor.
#[test]
fn multi_card_run_cannot_reach_foundation() {
    // Column 1: face-up 6♠ with 5♥ stacked on it after one move
    let deck = deck_with(&[(0, card(5, Suit::Hearts)), (2, card(6, Suit::Spades))]);
    let mut game = GameBuilder::new().build_with_deck(&deck);

    game.navigate(NavDir::Left);
    game.toggle_pickup_or_drop();
    game.navigate(NavDir::Right);
    game.toggle_pickup_or_drop();

    // Select the 6-5 run (cursor sits at the placed 5; extend up to the 6)
    game.extend(ExtendDir::Up);
    assert_eq!(game.selection().cursor(), Position::tableau(1, 1));
    game.toggle_pickup_or_drop();
    assert_eq!(game.selection().held().unwrap().run_len(), 2);

    game.extend(ExtendDir::Up);
    // Still hovering the origin: the carry was a no-op
    assert_eq!(game.selection().cursor(), Position::tableau(1, 1));
}

/// Dropping a held run back on its origin clears the selection and burns
/// no move.
#[test]
fn drop_on_origin_clears_selection() {
    let mut game = GameBuilder::new().build_with_deck(&Deck::standard());

    assert_eq!(game.toggle_pickup_or_drop(), Outcome::PickedUp);
    game.navigate(NavDir::Right);
    game.navigate(NavDir::Left);
    assert_eq!(game.toggle_pickup_or_drop(), Outcome::SelectionCleared);

    assert!(!game.selection().is_holding());
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.undos_available(), 0);
}

/// Cancel restores a foundation-sourced card exactly.
#[test]
fn cancel_restores_eagerly_popped_card() {
    let deck = deck_with(&[(9, card(1, Suit::Diamonds))]);
    let mut game = GameBuilder::new().build_with_deck(&deck);

    // Put the Ace on foundation 0 first
    game.navigate(NavDir::Right);
    game.navigate(NavDir::Right);
    game.toggle_pickup_or_drop();
    game.extend(ExtendDir::Up);
    game.toggle_pickup_or_drop();
    let foundations_before = game.foundations().clone();
    let tableau_before = game.tableau().clone();

    // Pick it up again (eager pop), wander, cancel
    game.toggle_pickup_or_drop();
    assert_eq!(game.foundations().pile(0).len(), 0);
    game.extend(ExtendDir::Down);
    assert_eq!(game.cancel(), Outcome::Cancelled);

    assert_eq!(game.foundations(), &foundations_before);
    assert_eq!(game.tableau(), &tableau_before);
    assert_eq!(game.selection().cursor(), Position::foundation(0));
}
