//! Round state types.

/// Round state.
///
/// `InProgress` moves to `Knocked` or `Gin` on a valid declaration and from
/// there to `Scored` once settled. Running out of cards moves straight to
/// `Scored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Players are drawing and discarding.
    InProgress,
    /// A player knocked with deadwood within the limit.
    Knocked,
    /// A player declared gin.
    Gin,
    /// The round has been scored.
    Scored,
}

/// The step of the current player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for a draw from the stock or the discard pile.
    Draw,
    /// Waiting for a discard, knock or gin.
    Discard,
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The seat that plays first.
    First,
    /// The other seat.
    Second,
}

impl Seat {
    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// A round-ending declaration made together with the final discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// Knock: deadwood within the knock limit.
    Knock,
    /// Gin: no deadwood.
    Gin,
}
