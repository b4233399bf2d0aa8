//! Layoff and the end-of-round point table.

extern crate alloc;

use alloc::vec::Vec;

use crate::analysis::HandAnalysis;
use crate::card::{Card, total_value};
use crate::meld::{Meld, MeldKind};
use crate::options::GameOptions;
use crate::result::{Award, Layoff, RoundOutcome};

/// Lays the defender's deadwood off on the knocker's melds.
///
/// Runs are tried before sets, each in grouping order. A run only takes the
/// cards touching its current ends, without growing further. Every defender
/// card is laid off at most once.
#[must_use]
pub fn layoff(knocker_melds: &[Meld], defender_deadwood: &[Card]) -> Vec<Layoff> {
    let mut laid_off: Vec<Layoff> = Vec::new();

    for kind in [MeldKind::Run, MeldKind::Set] {
        for (meld_index, meld) in knocker_melds.iter().enumerate() {
            if meld.kind() != kind {
                continue;
            }
            for &card in defender_deadwood {
                let taken = laid_off.iter().any(|layoff| layoff.card == card);
                if !taken && meld.accepts_layoff(card) {
                    tracing::debug!(%card, meld_index, "laid off");
                    laid_off.push(Layoff { card, meld_index });
                }
            }
        }
    }

    laid_off
}

/// Applies the point table to the knocker's and defender's deadwood.
///
/// `defender_deadwood` is the total after layoff.
#[must_use]
pub const fn score_declaration(
    knocker_deadwood: u32,
    defender_deadwood: u32,
    options: &GameOptions,
) -> Award {
    if knocker_deadwood == 0 {
        Award {
            outcome: RoundOutcome::Gin,
            to_knocker: true,
            points: options.gin_bonus + defender_deadwood,
        }
    } else if knocker_deadwood < defender_deadwood {
        Award {
            outcome: RoundOutcome::Knock,
            to_knocker: true,
            points: defender_deadwood - knocker_deadwood,
        }
    } else {
        Award {
            outcome: RoundOutcome::Undercut,
            to_knocker: false,
            points: knocker_deadwood - defender_deadwood + options.undercut_bonus,
        }
    }
}

/// Everything scoring needs to know about both hands at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    /// The knocker's evaluated hand.
    pub knocker: HandAnalysis,
    /// The defender's evaluated hand.
    pub defender: HandAnalysis,
    /// Defender cards laid off on the knocker's melds.
    pub layoffs: Vec<Layoff>,
    /// The defender's deadwood total after layoff.
    pub defender_deadwood: u32,
    /// The resulting award.
    pub award: Award,
}

impl Showdown {
    /// Evaluates both hands, lays off and scores.
    #[must_use]
    pub fn evaluate(knocker_cards: &[Card], defender_cards: &[Card], options: &GameOptions) -> Self {
        let knocker = HandAnalysis::of_cards(knocker_cards, options.selection);
        let defender = HandAnalysis::of_cards(defender_cards, options.selection);

        let layoffs = layoff(knocker.grouping.melds(), &defender.deadwood.cards());
        let laid_off_value = total_value(layoffs.iter().map(|layoff| &layoff.card));
        let defender_deadwood = defender.deadwood_total() - laid_off_value;

        let award = score_declaration(knocker.deadwood_total(), defender_deadwood, options);

        Self {
            knocker,
            defender,
            layoffs,
            defender_deadwood,
            award,
        }
    }
}
