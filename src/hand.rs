//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// A player's hand.
///
/// Holds 10 cards between turns and 11 right after a draw. Cards are kept in
/// the order they were added; the hand never contains the same card twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from the given cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the same card is given twice.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, HandError> {
        let mut hand = Self::new();
        for card in cards {
            hand.add(card)?;
        }
        Ok(hand)
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is already in the hand.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.contains(card) {
            return Err(HandError::DuplicateCard);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes a card from the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the hand.
    pub fn remove(&mut self, card: Card) -> Result<(), HandError> {
        let index = self
            .cards
            .iter()
            .position(|&held| held == card)
            .ok_or(HandError::CardNotFound)?;
        self.cards.remove(index);
        Ok(())
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the card is in the hand.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards grouped by suit, then ordered by rank.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by_key(|card| card.display_key());
        cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
