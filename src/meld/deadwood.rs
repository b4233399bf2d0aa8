extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, total_value};

/// Cards left outside the selected melds, split by meld potential.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deadwood {
    /// Cards that pair with another leftover card: same rank (exactly two of
    /// it), or same suit one rank apart.
    pub possible: Vec<Card>,
    /// Cards with no such partner.
    pub complete: Vec<Card>,
}

impl Deadwood {
    /// Returns the summed value of all deadwood cards.
    #[must_use]
    pub fn total(&self) -> u32 {
        total_value(&self.possible) + total_value(&self.complete)
    }

    /// Returns the number of deadwood cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.possible.len() + self.complete.len()
    }

    /// Returns whether there is no deadwood at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.possible.is_empty() && self.complete.is_empty()
    }

    /// Returns complete deadwood followed by possible deadwood.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.complete.iter().chain(&self.possible).copied().collect()
    }
}

/// Splits leftover cards into possible and complete deadwood.
///
/// Both lists keep the order of `leftover`.
#[must_use]
pub fn classify_deadwood(leftover: &[Card]) -> Deadwood {
    let (possible, complete) = leftover
        .iter()
        .copied()
        .partition(|&card| has_partner(card, leftover));
    Deadwood { possible, complete }
}

fn has_partner(card: Card, leftover: &[Card]) -> bool {
    let same_rank = leftover.iter().filter(|other| other.rank == card.rank).count();
    if same_rank == 2 {
        return true;
    }

    leftover.iter().any(|other| {
        other.suit == card.suit
            && (other.rank.is_followed_by(card.rank) || card.rank.is_followed_by(other.rank))
    })
}
