//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The stock has no cards left; reshuffle the discard pile into it first.
    #[error("the deck is empty")]
    EmptyDeck,
    /// The stock dealt a card that is already in play.
    #[error("the deck dealt the same card twice")]
    DuplicateCard,
}

/// Errors that can occur when taking from the discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The discard pile is empty.
    #[error("the discard pile is empty")]
    EmptyPile,
}

/// Errors that can occur when changing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not in the hand.
    #[error("card not found in hand")]
    CardNotFound,
    /// The card is already in the hand.
    #[error("card is already in the hand")]
    DuplicateCard,
}

/// Errors that can occur when parsing card notation such as `QH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text does not name one of the 52 cards.
    #[error("malformed card notation")]
    MalformedCardNotation,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// The action does not belong to the current turn phase.
    #[error("action not allowed in this turn phase")]
    WrongPhase,
    /// The discard pile is empty.
    #[error("the discard pile is empty")]
    EmptyPile,
    /// Stock and discard pile are both used up; the round has ended.
    #[error("no cards left to draw")]
    StockExhausted,
    /// The card is not in the hand.
    #[error("card not found in hand")]
    CardNotFound,
    /// Knock or gin declared without meeting the deadwood threshold.
    #[error("declaration does not meet the deadwood threshold")]
    InvalidDeclaration,
}

impl From<HandError> for ActionError {
    fn from(err: HandError) -> Self {
        match err {
            HandError::CardNotFound => Self::CardNotFound,
            HandError::DuplicateCard => Self::InvalidState,
        }
    }
}

impl From<PileError> for ActionError {
    fn from(err: PileError) -> Self {
        match err {
            PileError::EmptyPile => Self::EmptyPile,
        }
    }
}

/// Errors that can occur when settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round has not ended with a knock or gin.
    #[error("invalid round state for scoring")]
    InvalidState,
}
