//! Round result types and the running game score.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::Seat;
use crate::meld::Meld;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The knocker went gin.
    Gin,
    /// The knocker had less deadwood than the defender.
    Knock,
    /// The defender matched or beat the knocker's deadwood.
    Undercut,
    /// The cards ran out before anyone knocked. Nobody scores.
    Exhausted,
}

/// A defender card laid off on one of the knocker's melds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layoff {
    /// The card laid off.
    pub card: Card,
    /// Index of the meld in the knocker's grouping.
    pub meld_index: usize,
}

/// Points awarded for a knock or gin, before they are tied to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// Whether the knocker (rather than the defender) receives the points.
    pub to_knocker: bool,
    /// Points awarded.
    pub points: u32,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: RoundOutcome,
    /// The seat that knocked or went gin.
    pub knocker: Option<Seat>,
    /// The seat that scores, if any.
    pub winner: Option<Seat>,
    /// Points awarded to the winner.
    pub points: u32,
    /// The knocker's deadwood total.
    pub knocker_deadwood: u32,
    /// The defender's deadwood total after layoff.
    pub defender_deadwood: u32,
    /// The knocker's exposed melds.
    pub knocker_melds: Vec<Meld>,
    /// The defender's own melds.
    pub defender_melds: Vec<Meld>,
    /// Defender cards laid off on the knocker's melds.
    pub layoffs: Vec<Layoff>,
}

impl RoundResult {
    /// Result of a round that ended because no cards were left to draw.
    #[must_use]
    pub const fn exhausted() -> Self {
        Self {
            outcome: RoundOutcome::Exhausted,
            knocker: None,
            winner: None,
            points: 0,
            knocker_deadwood: 0,
            defender_deadwood: 0,
            knocker_melds: Vec::new(),
            defender_melds: Vec::new(),
            layoffs: Vec::new(),
        }
    }
}

/// Running score across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    first: u32,
    second: u32,
    target: u32,
}

impl ScoreBoard {
    /// Creates a score board playing to `target` points.
    #[must_use]
    pub const fn new(target: u32) -> Self {
        Self {
            first: 0,
            second: 0,
            target,
        }
    }

    /// Adds a round's points to the winning seat.
    pub const fn record(&mut self, result: &RoundResult) {
        match result.winner {
            Some(Seat::First) => self.first += result.points,
            Some(Seat::Second) => self.second += result.points,
            None => {}
        }
    }

    /// Returns the score of a seat.
    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.first,
            Seat::Second => self.second,
        }
    }

    /// Returns the seat ahead, or `None` when tied.
    #[must_use]
    pub const fn leader(&self) -> Option<Seat> {
        if self.first > self.second {
            Some(Seat::First)
        } else if self.second > self.first {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// Returns the seat that reached the target, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        if self.first >= self.target || self.second >= self.target {
            self.leader()
        } else {
            None
        }
    }
}
