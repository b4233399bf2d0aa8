extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

use super::Meld;

/// How a grouping is picked from overlapping candidate melds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionStrategy {
    /// Anchor a grouping at each candidate in turn and greedily add every
    /// later-compatible candidate in list order; keep the best anchor.
    ///
    /// This can miss a better grouping that no single anchor produces.
    #[default]
    Pivot,
    /// Search every disjoint combination of candidates for the highest value.
    Optimal,
}

/// A set of pairwise disjoint melds chosen for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    melds: Vec<Meld>,
}

impl Grouping {
    /// Returns the melds of the grouping.
    #[must_use]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Returns the summed value of every melded card.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.melds.iter().map(Meld::value).sum()
    }

    /// Returns whether any meld of the grouping holds the card.
    #[must_use]
    pub fn covers(&self, card: Card) -> bool {
        self.melds.iter().any(|meld| meld.contains(card))
    }

    /// Returns every melded card, meld by meld.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.melds
            .iter()
            .flat_map(|meld| meld.cards().iter().copied())
            .collect()
    }

    /// Returns the number of melds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.melds.len()
    }

    /// Returns whether no meld was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.melds.is_empty()
    }

    fn overlaps(&self, meld: &Meld) -> bool {
        self.melds.iter().any(|accepted| accepted.overlaps(meld))
    }
}

/// The chosen grouping and the hand cards it leaves uncovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// The selected melds.
    pub grouping: Grouping,
    /// Hand cards outside the grouping, in hand order.
    pub leftover: Vec<Card>,
}

/// Picks the disjoint grouping of `candidates` with the highest melded value.
///
/// Ties go to the grouping found first. With no candidates the grouping is
/// empty and every hand card is left over.
#[must_use]
pub fn select_best_grouping(
    candidates: &[Meld],
    hand: &[Card],
    strategy: SelectionStrategy,
) -> Selection {
    let grouping = match strategy {
        SelectionStrategy::Pivot => best_pivot_grouping(candidates),
        SelectionStrategy::Optimal => best_optimal_grouping(candidates),
    };

    tracing::debug!(
        ?strategy,
        candidates = candidates.len(),
        melds = grouping.len(),
        value = grouping.value(),
        "selected meld grouping"
    );

    let leftover = hand
        .iter()
        .copied()
        .filter(|&card| !grouping.covers(card))
        .collect();

    Selection { grouping, leftover }
}

fn best_pivot_grouping(candidates: &[Meld]) -> Grouping {
    let mut best: Option<(u32, Grouping)> = None;

    for pivot in candidates {
        let mut grouping = Grouping {
            melds: alloc::vec![pivot.clone()],
        };
        for candidate in candidates {
            // Rejects the pivot itself as well as anything touching an accepted meld.
            if !grouping.overlaps(candidate) {
                grouping.melds.push(candidate.clone());
            }
        }

        let value = grouping.value();
        if best.as_ref().is_none_or(|(best_value, _)| value > *best_value) {
            best = Some((value, grouping));
        }
    }

    best.map(|(_, grouping)| grouping).unwrap_or_default()
}

fn best_optimal_grouping(candidates: &[Meld]) -> Grouping {
    let mut current = Grouping::default();
    let mut best = Grouping::default();
    let mut best_value = 0;
    search(candidates, 0, &mut current, &mut best, &mut best_value);
    best
}

fn search(
    candidates: &[Meld],
    from: usize,
    current: &mut Grouping,
    best: &mut Grouping,
    best_value: &mut u32,
) {
    let value = current.value();
    if value > *best_value {
        *best_value = value;
        *best = current.clone();
    }

    for (index, candidate) in candidates.iter().enumerate().skip(from) {
        if current.overlaps(candidate) {
            continue;
        }
        current.melds.push(candidate.clone());
        search(candidates, index + 1, current, best, best_value);
        current.melds.pop();
    }
}
