//! One-pass evaluation of a hand: candidates, grouping and deadwood.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::meld::{
    Deadwood, Grouping, Meld, SelectionStrategy, classify_deadwood, find_candidate_melds,
    select_best_grouping,
};
use crate::options::GameOptions;

/// The derived view of a hand at one moment.
///
/// Recompute it after every change to the hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandAnalysis {
    /// Every meld found in the hand.
    pub candidates: Vec<Meld>,
    /// The melds selected for scoring.
    pub grouping: Grouping,
    /// Cards outside the grouping.
    pub deadwood: Deadwood,
}

impl HandAnalysis {
    /// Evaluates the given cards.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::{Card, HandAnalysis, SelectionStrategy};
    ///
    /// let cards: Vec<Card> = ["AH", "2H", "3H", "4H", "4D", "4C", "9S"]
    ///     .iter()
    ///     .map(|text| text.parse().unwrap())
    ///     .collect();
    /// let analysis = HandAnalysis::of_cards(&cards, SelectionStrategy::Pivot);
    /// assert_eq!(analysis.deadwood_total(), 9);
    /// ```
    #[must_use]
    pub fn of_cards(cards: &[Card], strategy: SelectionStrategy) -> Self {
        let candidates = find_candidate_melds(cards);
        let selection = select_best_grouping(&candidates, cards, strategy);
        let deadwood = classify_deadwood(&selection.leftover);
        Self {
            candidates,
            grouping: selection.grouping,
            deadwood,
        }
    }

    /// Evaluates a hand with the configured selection strategy.
    #[must_use]
    pub fn of_hand(hand: &Hand, options: &GameOptions) -> Self {
        Self::of_cards(hand.cards(), options.selection)
    }

    /// Returns the summed value of possible and complete deadwood.
    #[must_use]
    pub fn deadwood_total(&self) -> u32 {
        self.deadwood.total()
    }

    /// Returns whether the hand has no deadwood.
    #[must_use]
    pub fn is_gin(&self) -> bool {
        self.deadwood_total() == 0
    }

    /// Returns whether the deadwood total allows a knock. True for gin too.
    #[must_use]
    pub fn is_valid_knock(&self, knock_limit: u32) -> bool {
        self.deadwood_total() <= knock_limit
    }
}

/// Returns whether the hand has zero deadwood.
#[must_use]
pub fn is_gin(hand: &Hand, options: &GameOptions) -> bool {
    HandAnalysis::of_hand(hand, options).is_gin()
}

/// Returns whether the hand's deadwood is within the knock limit.
#[must_use]
pub fn is_valid_knock(hand: &Hand, options: &GameOptions) -> bool {
    HandAnalysis::of_hand(hand, options).is_valid_knock(options.knock_limit)
}
