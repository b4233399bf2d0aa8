//! Round engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::{Deck, DiscardPile};
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod settle;
pub mod state;

pub use state::{Declaration, RoundState, Seat, TurnPhase};

/// A single round of two-player Gin Rummy.
///
/// The round owns the stock, the discard pile and both hands. Players act
/// in turn: draw from the stock or the discard pile, then discard, knock or
/// declare gin. A valid declaration ends play; [`Round::settle`] then scores
/// it.
#[derive(Debug, Clone)]
pub struct Round {
    /// Game options.
    options: GameOptions,
    /// The stock.
    deck: Deck,
    /// The discard pile.
    discard: DiscardPile,
    /// Hand of the first seat.
    first: Hand,
    /// Hand of the second seat.
    second: Hand,
    /// Current round state.
    state: RoundState,
    /// Seat to act.
    turn: Seat,
    /// Step of the current turn.
    phase: TurnPhase,
    /// Seat that knocked or went gin.
    knocker: Option<Seat>,
    /// Result once scored.
    result: Option<RoundResult>,
}

impl Round {
    /// Shuffles a fresh deck with the given seed and deals both hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hand size needs more than the deck
    /// holds.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::{GameOptions, Round, Seat};
    ///
    /// let round = Round::deal(GameOptions::default(), 42).unwrap();
    /// assert_eq!(round.hand(Seat::First).len(), 10);
    /// assert_eq!(round.stock_len(), 32);
    /// ```
    pub fn deal(options: GameOptions, seed: u64) -> Result<Self, DeckError> {
        tracing::info!(seed, "dealing new round");
        Self::deal_from(options, Deck::new(seed))
    }

    /// Deals both hands alternately from the given stock, first seat first.
    ///
    /// # Errors
    ///
    /// Returns an error if the stock runs out before both hands are full, or
    /// if it deals the same card twice.
    pub fn deal_from(options: GameOptions, mut deck: Deck) -> Result<Self, DeckError> {
        let mut first = Vec::with_capacity(options.hand_size);
        let mut second = Vec::with_capacity(options.hand_size);

        for _ in 0..options.hand_size {
            first.push(deck.deal_one()?);
            second.push(deck.deal_one()?);
        }

        let first = Hand::from_cards(first).map_err(|_| DeckError::DuplicateCard)?;
        let second = Hand::from_cards(second).map_err(|_| DeckError::DuplicateCard)?;
        if first.cards().iter().any(|&card| second.contains(card)) {
            return Err(DeckError::DuplicateCard);
        }

        tracing::debug!(stock = deck.len(), "dealt both hands");

        Ok(Self::from_parts(
            options,
            first,
            second,
            deck,
            DiscardPile::new(),
            Seat::First,
        ))
    }

    /// Creates a round from an arranged position, with `turn` about to draw.
    #[must_use]
    pub const fn from_parts(
        options: GameOptions,
        first: Hand,
        second: Hand,
        deck: Deck,
        discard: DiscardPile,
        turn: Seat,
    ) -> Self {
        Self {
            options,
            deck,
            discard,
            first,
            second,
            state: RoundState::InProgress,
            turn,
            phase: TurnPhase::Draw,
            knocker: None,
            result: None,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the seat to act.
    #[must_use]
    pub const fn turn(&self) -> Seat {
        self.turn
    }

    /// Returns the step of the current turn.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the seat that ended the round with a declaration.
    #[must_use]
    pub const fn knocker(&self) -> Option<Seat> {
        self.knocker
    }

    /// Returns a seat's hand.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::First => &mut self.first,
            Seat::Second => &mut self.second,
        }
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard.top()
    }

    /// Returns the number of cards left in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result once the round is scored.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns every card in the stock, the discard pile and both hands.
    #[must_use]
    pub fn cards_in_play(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(crate::card::DECK_SIZE);
        cards.extend_from_slice(self.deck.cards());
        cards.extend_from_slice(self.discard.cards());
        cards.extend_from_slice(self.first.cards());
        cards.extend_from_slice(self.second.cards());
        cards
    }
}
