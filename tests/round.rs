//! Round flow, layoff and scoring tests.

use std::collections::HashSet;

use ginrs::{
    ActionError, Card, DECK_SIZE, Deck, DeckError, DiscardPile, GameOptions, Hand, Layoff, MeldKind, Round,
    RoundOutcome, RoundState, ScoreBoard, Seat, SettleError, TurnPhase, layoff, score_declaration,
};

fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace()
        .map(|card| card.parse().unwrap())
        .collect()
}

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn hand(text: &str) -> Hand {
    Hand::from_cards(cards(text)).unwrap()
}

/// Builds a round where `first` is about to draw. The last card of `stock`
/// is drawn first.
fn arranged(first: &str, second: &str, stock: &str, discard: &str) -> Round {
    Round::from_parts(
        GameOptions::default(),
        hand(first),
        hand(second),
        Deck::from_cards(cards(stock), 7),
        DiscardPile::from_cards(cards(discard)),
        Seat::First,
    )
}

// Knocker melds: 2-3-4 of spades, three sevens, J-Q-K of clubs.
const KNOCKER_MELDS: &str = "2S 3S 4S 7H 7D 7C JC QC KC";

#[test]
fn deal_gives_ten_cards_each_from_one_deck() {
    let round = Round::deal(GameOptions::default(), 42).unwrap();

    assert_eq!(round.state(), RoundState::InProgress);
    assert_eq!(round.turn(), Seat::First);
    assert_eq!(round.phase(), TurnPhase::Draw);
    assert_eq!(round.hand(Seat::First).len(), 10);
    assert_eq!(round.hand(Seat::Second).len(), 10);
    assert_eq!(round.stock_len(), DECK_SIZE - 20);
    assert!(round.top_discard().is_none());

    let all: HashSet<Card> = round.cards_in_play().into_iter().collect();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn same_seed_deals_same_hands() {
    let a = Round::deal(GameOptions::default(), 9).unwrap();
    let b = Round::deal(GameOptions::default(), 9).unwrap();
    assert_eq!(a.hand(Seat::First), b.hand(Seat::First));
    assert_eq!(a.hand(Seat::Second), b.hand(Seat::Second));
}

#[test]
fn turn_order_is_enforced() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} 8D"),
        "9S 9H 9D QS QH QD AC 2D 5C 6S",
        "KH 5H",
        "",
    );

    assert_eq!(
        round.draw_stock(Seat::Second).unwrap_err(),
        ActionError::NotYourTurn
    );
    assert_eq!(
        round.discard(Seat::First, card("8D")).unwrap_err(),
        ActionError::WrongPhase
    );
    assert_eq!(
        round.draw_discard(Seat::First).unwrap_err(),
        ActionError::EmptyPile
    );
    assert_eq!(round.settle().unwrap_err(), SettleError::InvalidState);

    assert_eq!(round.draw_stock(Seat::First).unwrap(), card("5H"));
    assert_eq!(round.phase(), TurnPhase::Discard);
    assert_eq!(
        round.draw_stock(Seat::First).unwrap_err(),
        ActionError::WrongPhase
    );
    assert_eq!(
        round.discard(Seat::First, card("AS")).unwrap_err(),
        ActionError::CardNotFound
    );

    round.discard(Seat::First, card("5H")).unwrap();
    assert_eq!(round.turn(), Seat::Second);
    assert_eq!(round.phase(), TurnPhase::Draw);
    assert_eq!(round.top_discard(), Some(card("5H")));

    assert_eq!(round.draw_discard(Seat::Second).unwrap(), card("5H"));
    assert!(round.hand(Seat::Second).contains(card("5H")));
    assert!(round.discard_pile().is_empty());
}

#[test]
fn knock_scores_the_deadwood_difference() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} 8D"),
        "9S 9H 9D QS QH QD AC 2D 5C 6S",
        "KH",
        "",
    );

    round.draw_stock(Seat::First).unwrap();
    assert_eq!(
        round.knock(Seat::First, card("KH")).unwrap(),
        RoundState::Knocked
    );
    assert_eq!(round.knocker(), Some(Seat::First));
    assert_eq!(round.top_discard(), Some(card("KH")));

    let result = round.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Knock);
    assert_eq!(result.knocker_deadwood, 8);
    assert_eq!(result.defender_deadwood, 14);
    assert!(result.layoffs.is_empty());
    assert_eq!(result.winner, Some(Seat::First));
    assert_eq!(result.points, 6);
    assert_eq!(round.state(), RoundState::Scored);
    assert_eq!(round.result(), Some(&result));
}

#[test]
fn knock_at_exactly_the_limit_is_accepted() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} 10D"),
        "9S 9H 9D QS QH QD AC 2D 5C 6S",
        "KH",
        "",
    );

    round.draw_stock(Seat::First).unwrap();
    assert_eq!(
        round.knock(Seat::First, card("KH")).unwrap(),
        RoundState::Knocked
    );

    let result = round.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Knock);
    assert_eq!(result.knocker_deadwood, 10);
    assert_eq!(result.defender_deadwood, 14);
    assert_eq!(result.points, 4);
}

#[test]
fn knock_over_the_limit_is_rejected() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} QD"),
        "9S 9H 9D QS QH AD AC 2D 5C 6S",
        "5H",
        "",
    );

    round.draw_stock(Seat::First).unwrap();
    assert_eq!(
        round.knock(Seat::First, card("5H")).unwrap_err(),
        ActionError::InvalidDeclaration
    );

    assert_eq!(round.state(), RoundState::InProgress);
    assert_eq!(round.phase(), TurnPhase::Discard);
    assert_eq!(round.knocker(), None);
    assert!(round.hand(Seat::First).contains(card("5H")));
    assert_eq!(round.hand(Seat::First).len(), 11);
    assert!(round.discard_pile().is_empty());

    // Gin needs zero deadwood; a plain discard still works afterwards.
    assert_eq!(
        round.gin(Seat::First, card("QD")).unwrap_err(),
        ActionError::InvalidDeclaration
    );
    round.discard(Seat::First, card("5H")).unwrap();
    assert_eq!(round.turn(), Seat::Second);
}

#[test]
fn equal_or_lower_defender_deadwood_undercuts() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} 5D"),
        "9S 9H 9D QS QH QD AH 2H 3H 3C",
        "KH",
        "",
    );

    round.draw_stock(Seat::First).unwrap();
    round.knock(Seat::First, card("KH")).unwrap();

    let result = round.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Undercut);
    assert_eq!(result.knocker_deadwood, 5);
    assert_eq!(result.defender_deadwood, 3);
    assert_eq!(result.winner, Some(Seat::Second));
    assert_eq!(result.points, 5 - 3 + 15);
}

#[test]
fn gin_earns_bonus_after_layoff() {
    let mut round = arranged(
        "2S 3S 4S 5S 7H 7D 7C JC QC KC",
        "QS QH QD AH 2H 3H 6S 10C 7S 4D",
        "9D",
        "",
    );

    round.draw_stock(Seat::First).unwrap();
    assert_eq!(round.gin(Seat::First, card("9D")).unwrap(), RoundState::Gin);

    let result = round.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Gin);
    assert_eq!(result.knocker_deadwood, 0);
    assert_eq!(
        result.layoffs,
        vec![
            Layoff {
                card: card("6S"),
                meld_index: 0
            },
            Layoff {
                card: card("10C"),
                meld_index: 1
            },
            Layoff {
                card: card("7S"),
                meld_index: 2
            },
        ]
    );
    assert_eq!(result.defender_deadwood, 4);
    assert_eq!(result.winner, Some(Seat::First));
    assert_eq!(result.points, 25 + 4);
}

#[test]
fn knocking_with_no_deadwood_scores_as_gin() {
    let mut round = arranged(
        "2S 3S 4S 5S 7H 7D 7C JC QC KC",
        "QS QH QD AH 2H 3H 6S 10C 7S 4D",
        "9D",
        "",
    );

    round.draw_stock(Seat::First).unwrap();
    assert_eq!(
        round.knock(Seat::First, card("9D")).unwrap(),
        RoundState::Gin
    );
    assert_eq!(round.settle().unwrap().outcome, RoundOutcome::Gin);
}

#[test]
fn defender_with_knockable_hand_does_not_end_the_round() {
    // Second holds only 3 points of deadwood but never declares.
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} QD"),
        "9S 9H 9D 10S JS QS AH 2H 3H 3C",
        "5H",
        "",
    );
    assert!(ginrs::is_valid_knock(round.hand(Seat::Second), round.options()));

    round.draw_stock(Seat::First).unwrap();
    round.discard(Seat::First, card("5H")).unwrap();

    assert_eq!(round.state(), RoundState::InProgress);
    assert_eq!(round.turn(), Seat::Second);
    assert!(round.result().is_none());
}

#[test]
fn empty_stock_is_rebuilt_from_the_discard_pile() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} QD"),
        "9S 9H 9D 10S JS QS AH 2H 3H 3C",
        "",
        "5H 6C",
    );

    // Only 5H can be recycled; 6C stays face up.
    assert_eq!(round.draw_stock(Seat::First).unwrap(), card("5H"));
    assert_eq!(round.top_discard(), Some(card("6C")));
    assert_eq!(round.discard_pile().len(), 1);
    assert_eq!(round.stock_len(), 0);
    assert_eq!(round.state(), RoundState::InProgress);
}

#[test]
fn running_out_of_cards_ends_the_round_without_score() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} QD"),
        "9S 9H 9D 10S JS QS AH 2H 3H 3C",
        "",
        "6C",
    );

    // Stock empty, pile holds a single face-up card: nothing left to draw.
    assert_eq!(
        round.draw_stock(Seat::First).unwrap_err(),
        ActionError::StockExhausted
    );
    assert_eq!(round.state(), RoundState::Scored);
    assert_eq!(
        round.draw_discard(Seat::First).unwrap_err(),
        ActionError::InvalidState
    );

    let result = round.settle().unwrap();
    assert_eq!(result.outcome, RoundOutcome::Exhausted);
    assert_eq!(result.knocker, None);
    assert_eq!(result.winner, None);
    assert_eq!(result.points, 0);
}

#[test]
fn layoff_uses_each_card_once_and_runs_first() {
    let knocker = ginrs::HandAnalysis::of_cards(
        &cards("3H 4H 5H 6D 6C 6S"),
        ginrs::SelectionStrategy::Pivot,
    );
    assert_eq!(knocker.grouping.melds()[0].kind(), MeldKind::Run);

    // 6H fits both the run and the set of sixes; the run takes it.
    let laid = layoff(knocker.grouping.melds(), &cards("6H 2H 7H 9C"));
    assert_eq!(
        laid,
        vec![
            Layoff {
                card: card("6H"),
                meld_index: 0
            },
            Layoff {
                card: card("2H"),
                meld_index: 0
            },
        ]
    );
}

#[test]
fn point_table() {
    let options = GameOptions::default();

    let knock = score_declaration(8, 14, &options);
    assert_eq!(knock.outcome, RoundOutcome::Knock);
    assert!(knock.to_knocker);
    assert_eq!(knock.points, 6);

    let gin = score_declaration(0, 20, &options);
    assert_eq!(gin.outcome, RoundOutcome::Gin);
    assert_eq!(gin.points, 45);

    let tie = score_declaration(7, 7, &options);
    assert_eq!(tie.outcome, RoundOutcome::Undercut);
    assert!(!tie.to_knocker);
    assert_eq!(tie.points, 15);

    let custom = GameOptions::default()
        .with_gin_bonus(20)
        .with_undercut_bonus(10);
    assert_eq!(score_declaration(0, 5, &custom).points, 25);
    assert_eq!(score_declaration(9, 4, &custom).points, 15);
}

#[test]
fn score_board_plays_to_target() {
    let mut round = arranged(
        &format!("{KNOCKER_MELDS} 8D"),
        "9S 9H 9D QS QH QD AC 2D 5C 6S",
        "KH",
        "",
    );
    round.draw_stock(Seat::First).unwrap();
    round.knock(Seat::First, card("KH")).unwrap();
    let result = round.settle().unwrap();

    let mut board = ScoreBoard::new(10);
    assert_eq!(board.leader(), None);

    board.record(&result);
    assert_eq!(board.score(Seat::First), 6);
    assert_eq!(board.score(Seat::Second), 0);
    assert_eq!(board.leader(), Some(Seat::First));
    assert_eq!(board.winner(), None);

    board.record(&result);
    assert_eq!(board.winner(), Some(Seat::First));
}

#[test]
fn deal_from_rejects_short_or_repeating_stock() {
    let options = GameOptions::default().with_hand_size(2);

    let short = Deck::from_cards(cards("2H 3H 4H"), 1);
    assert_eq!(
        Round::deal_from(options, short).unwrap_err(),
        DeckError::EmptyDeck
    );

    // Last card is dealt first: First gets 9C and 5D, Second gets 9C and 4H.
    let repeating = Deck::from_cards(cards("AS 4H 5D 9C 9C"), 1);
    assert_eq!(
        Round::deal_from(options, repeating).unwrap_err(),
        DeckError::DuplicateCard
    );

    let round = Round::deal_from(options, Deck::from_cards(cards("AS 4H 5D 6C 9C"), 1)).unwrap();
    assert_eq!(round.hand(Seat::First).cards(), cards("9C 5D").as_slice());
    assert_eq!(round.hand(Seat::Second).cards(), cards("6C 4H").as_slice());
    assert_eq!(round.stock_len(), 1);
}
