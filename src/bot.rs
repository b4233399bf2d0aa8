//! Greedy bot policy.
//!
//! Draw: take the top discard only when it lowers the deadwood total.
//!
//! Discard, in order:
//! - no deadwood and a meld longer than three cards: gin, shedding a spare
//!   card from that meld (a random set member, or the top of a run);
//! - one deadwood card: gin, discarding it;
//! - deadwood without its highest card within the knock limit: knock,
//!   discarding the highest;
//! - otherwise discard the highest complete deadwood, falling back to the
//!   highest possible deadwood.
//!
//! The bot only reads the state it is handed and never holds a round.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::analysis::HandAnalysis;
use crate::card::{Card, total_value};
use crate::game::Declaration;
use crate::hand::Hand;
use crate::meld::MeldKind;
use crate::options::GameOptions;

/// Where to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawChoice {
    /// Take the top card of the discard pile.
    DiscardPile,
    /// Draw from the stock.
    Stock,
}

/// What to do with the final card of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    /// Discard the card and pass the turn.
    Discard(Card),
    /// Discard the card and knock.
    Knock(Card),
    /// Discard the card and declare gin.
    Gin(Card),
}

impl BotAction {
    /// Returns the card to discard.
    #[must_use]
    pub const fn card(self) -> Card {
        match self {
            Self::Discard(card) | Self::Knock(card) | Self::Gin(card) => card,
        }
    }

    /// Returns the declaration that goes with the discard, if any.
    #[must_use]
    pub const fn declaration(self) -> Option<Declaration> {
        match self {
            Self::Discard(_) => None,
            Self::Knock(_) => Some(Declaration::Knock),
            Self::Gin(_) => Some(Declaration::Gin),
        }
    }
}

/// A computer player.
#[derive(Debug, Clone)]
pub struct Bot {
    /// Game options.
    options: GameOptions,
    /// Random number generator for choosing among equal cards.
    rng: ChaCha8Rng,
}

impl Bot {
    /// Creates a bot with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Decides whether to take `top_discard` or draw from the stock.
    #[must_use]
    pub fn choose_draw(&self, hand: &Hand, top_discard: Option<Card>) -> DrawChoice {
        let Some(top) = top_discard else {
            return DrawChoice::Stock;
        };

        let current = HandAnalysis::of_hand(hand, &self.options).deadwood_total();
        let mut cards: Vec<Card> = hand.cards().to_vec();
        cards.push(top);
        let with_top = HandAnalysis::of_cards(&cards, self.options.selection).deadwood_total();

        tracing::debug!(%top, current, with_top, "weighing top discard");

        if with_top < current {
            DrawChoice::DiscardPile
        } else {
            DrawChoice::Stock
        }
    }

    /// Picks the discard for a hand that has just drawn.
    ///
    /// Returns `None` only for an empty hand.
    pub fn choose_discard(&mut self, hand: &Hand) -> Option<BotAction> {
        let analysis = HandAnalysis::of_hand(hand, &self.options);
        let mut deadwood = analysis.deadwood.cards();
        deadwood.sort_by_key(|card| card.value());

        let action = match deadwood.as_slice() {
            [] => self
                .shed_from_fat_meld(&analysis)
                .or_else(|| highest(hand.cards()).map(BotAction::Discard)),
            [only] => Some(BotAction::Gin(*only)),
            [rest @ .., top] if total_value(rest) <= self.options.knock_limit => {
                Some(BotAction::Knock(*top))
            }
            _ => highest(&analysis.deadwood.complete)
                .or_else(|| highest(&analysis.deadwood.possible))
                .map(BotAction::Discard),
        };

        tracing::debug!(?action, deadwood = analysis.deadwood_total(), "bot discard");
        action
    }

    fn shed_from_fat_meld(&mut self, analysis: &HandAnalysis) -> Option<BotAction> {
        let meld = analysis
            .grouping
            .melds()
            .iter()
            .find(|meld| meld.len() > 3)?;
        let card = match meld.kind() {
            MeldKind::Set => meld.cards().choose(&mut self.rng).copied(),
            MeldKind::Run => meld.cards().last().copied(),
        }?;
        Some(BotAction::Gin(card))
    }
}

// First card of the highest value.
fn highest(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|best, card| if card.value() > best.value() { card } else { best })
}
