//! Property tests for the deal shape and the placement predicates.

use proptest::prelude::*;

use patience_engine::{
    Card, CardId, FoundationPile, GameBuilder, Rank, Suit, TableauColumn,
};

fn suit_strategy() -> impl Strategy<Value = Suit> {
    (0..4usize).prop_map(|index| Suit::ALL[index])
}

fn rank_strategy() -> impl Strategy<Value = Rank> {
    (1..=13u8).prop_map(Rank::new)
}

proptest! {
    /// Any seed deals 28 tableau cards in the 1..=7 triangle with only the
    /// column tops face-up, and leaves 24 in the stock.
    #[test]
    fn deal_shape_holds_for_any_seed(seed in any::<u64>()) {
        let game = GameBuilder::new().build(seed);

        let mut seen = std::collections::HashSet::new();
        for (index, column) in game.tableau().columns().iter().enumerate() {
            prop_assert_eq!(column.len(), index + 1);
            for (row, card) in column.cards().iter().enumerate() {
                prop_assert_eq!(card.face_up(), row == index);
                prop_assert!(seen.insert((card.rank(), card.suit())));
            }
        }
        prop_assert_eq!(seen.len(), 28);
        prop_assert_eq!(game.stock().stock_len(), 24);
        prop_assert_eq!(game.stock().waste_len(), 0);
    }

    /// A foundation accepts exactly: an Ace on an empty pile, or the same
    /// suit one rank above the top.
    #[test]
    fn foundation_rule_is_exact(
        height in 0..13usize,
        pile_suit in suit_strategy(),
        rank in rank_strategy(),
        suit in suit_strategy(),
    ) {
        let mut pile = FoundationPile::new();
        for step in 0..height {
            pile.push(Card::face_up_card(
                CardId::new(step as u8),
                Rank::new(step as u8 + 1),
                pile_suit,
            ));
        }

        let candidate = Card::face_up_card(CardId::new(51), rank, suit);
        let expected = if height == 0 {
            rank == Rank::ACE
        } else {
            suit == pile_suit && rank.value() == height as u8 + 1
        };
        prop_assert_eq!(pile.accepts(&candidate), expected);
    }

    /// A column accepts exactly: a King on an empty column, or an
    /// opposite-color card one rank below a face-up top.
    #[test]
    fn tableau_rule_is_exact(
        top_rank in rank_strategy(),
        top_suit in suit_strategy(),
        top_face_up in any::<bool>(),
        rank in rank_strategy(),
        suit in suit_strategy(),
    ) {
        let empty = TableauColumn::new();
        let candidate = Card::face_up_card(CardId::new(50), rank, suit);
        prop_assert_eq!(empty.accepts(&candidate), rank == Rank::KING);

        let mut column = TableauColumn::new();
        let top = if top_face_up {
            Card::face_up_card(CardId::new(51), top_rank, top_suit)
        } else {
            Card::new(CardId::new(51), top_rank, top_suit)
        };
        column.push(top);

        let expected = top_face_up
            && top_suit.color() != suit.color()
            && top_rank.value() == rank.value() + 1;
        prop_assert_eq!(column.accepts(&candidate), expected);
    }

    /// Before the first draw the stock area is unreachable: the extend-up
    /// hop from columns 0-2 leaves the cursor where it was.
    #[test]
    fn stock_unreachable_before_reveal(seed in any::<u64>()) {
        use patience_engine::{ExtendDir, NavDir, Position};

        let mut game = GameBuilder::new().build(seed);
        game.navigate(NavDir::Left);
        let before = game.selection().cursor();
        game.extend(ExtendDir::Up);
        prop_assert_eq!(game.selection().cursor(), before);
        prop_assert_ne!(game.selection().cursor(), Position::StockHead);
    }
}
