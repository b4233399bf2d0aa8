//! Melds and the three hand-evaluation passes: finding candidate melds,
//! selecting a disjoint grouping, and classifying the leftover deadwood.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit, total_value};

mod deadwood;
mod finder;
mod selector;

pub use deadwood::{Deadwood, classify_deadwood};
pub use finder::find_candidate_melds;
pub use selector::{Grouping, Selection, SelectionStrategy, select_best_grouping};

/// Kind of meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeldKind {
    /// Three or more consecutive ranks of one suit.
    Run,
    /// Three or four cards of one rank.
    Set,
}

/// A group of three or more cards that score as melded.
///
/// A meld is derived from a hand and holds copies of the hand's cards.
/// Runs keep their cards in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Meld {
    kind: MeldKind,
    cards: Vec<Card>,
}

impl Meld {
    /// Builds a run from cards already sorted by rank.
    pub(crate) const fn run(cards: Vec<Card>) -> Self {
        Self {
            kind: MeldKind::Run,
            cards,
        }
    }

    /// Builds a set from cards of a single rank.
    pub(crate) const fn set(cards: Vec<Card>) -> Self {
        Self {
            kind: MeldKind::Set,
            cards,
        }
    }

    /// Returns the kind of meld.
    #[must_use]
    pub const fn kind(&self) -> MeldKind {
        self.kind
    }

    /// Returns the cards of the meld.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the meld has no cards. Never true for a found meld.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the summed value of the meld's cards.
    #[must_use]
    pub fn value(&self) -> u32 {
        total_value(&self.cards)
    }

    /// Returns whether the meld contains the card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns whether the two melds share at least one card.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.cards.iter().any(|&card| other.contains(card))
    }

    /// Returns the suit of a run.
    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        match self.kind {
            MeldKind::Run => self.cards.first().map(|card| card.suit),
            MeldKind::Set => None,
        }
    }

    /// Returns the rank shared by the cards of a set.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        match self.kind {
            MeldKind::Set => self.cards.first().map(|card| card.rank),
            MeldKind::Run => None,
        }
    }

    /// Returns whether an opponent's card can be laid off on this meld.
    ///
    /// A run takes the card of its suit directly below its lowest or above its
    /// highest card; a set takes any card of its rank.
    #[must_use]
    pub fn accepts_layoff(&self, card: Card) -> bool {
        if self.contains(card) {
            return false;
        }
        match self.kind {
            MeldKind::Set => self.rank() == Some(card.rank),
            MeldKind::Run => {
                let (Some(low), Some(high)) = (self.cards.first(), self.cards.last()) else {
                    return false;
                };
                self.suit() == Some(card.suit)
                    && (card.rank.is_followed_by(low.rank) || high.rank.is_followed_by(card.rank))
            }
        }
    }
}
