extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};

use super::Meld;

/// Finds every run and set present in the cards, overlapping ones included.
///
/// Runs come first, suit by suit: every window of three or more consecutive
/// ranks is emitted, so a five-card run yields six candidates. Sets follow,
/// rank by rank: three of a kind yields one set, four of a kind yields the
/// four-card set followed by its four three-card subsets.
///
/// # Example
///
/// ```
/// use ginrs::{Card, find_candidate_melds};
///
/// let cards: Vec<Card> = ["3H", "4H", "5H", "6H", "7H"]
///     .iter()
///     .map(|text| text.parse().unwrap())
///     .collect();
/// assert_eq!(find_candidate_melds(&cards).len(), 6);
/// ```
#[must_use]
pub fn find_candidate_melds(cards: &[Card]) -> Vec<Meld> {
    let mut melds = Vec::new();
    for suit in Suit::ALL {
        push_runs(suit, cards, &mut melds);
    }
    for rank in Rank::ALL {
        push_sets(rank, cards, &mut melds);
    }
    melds
}

fn push_runs(suit: Suit, cards: &[Card], melds: &mut Vec<Meld>) {
    let mut suited: Vec<Card> = cards.iter().copied().filter(|card| card.suit == suit).collect();
    suited.sort_by_key(|card| card.rank);

    for start in 0..suited.len() {
        // Length of the consecutive stretch beginning at `start`.
        let mut end = start + 1;
        while end < suited.len() && suited[end - 1].rank.is_followed_by(suited[end].rank) {
            end += 1;
        }
        for stop in (start + 3)..=end {
            melds.push(Meld::run(suited[start..stop].to_vec()));
        }
    }
}

fn push_sets(rank: Rank, cards: &[Card], melds: &mut Vec<Meld>) {
    let same: Vec<Card> = cards.iter().copied().filter(|card| card.rank == rank).collect();
    match same.len() {
        3 => melds.push(Meld::set(same)),
        4 => {
            melds.push(Meld::set(same.clone()));
            for skip in (0..4).rev() {
                let subset = same
                    .iter()
                    .enumerate()
                    .filter(|&(index, _)| index != skip)
                    .map(|(_, &card)| card)
                    .collect();
                melds.push(Meld::set(subset));
            }
        }
        _ => {}
    }
}
