//! Stock and discard pile.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::{DeckError, PileError};

/// The face-down stock cards are dealt from.
///
/// Cards are dealt from the back of the internal list.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left in the stock.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled 52-card deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self::from_cards(Card::standard_deck().to_vec(), seed);
        deck.shuffle();
        deck
    }

    /// Creates a stock holding exactly the given cards, unshuffled.
    ///
    /// The last card of `cards` is dealt first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        let mut stock = Vec::with_capacity(DECK_SIZE);
        stock.extend(cards);
        Self {
            cards: stock,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the remaining cards into a uniform random order.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the stock is empty.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Moves the given cards into the stock and shuffles it.
    pub fn refill(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
        self.shuffle();
    }

    /// Returns the remaining cards, next card to be dealt last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the stock is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The face-up discard pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    /// Discarded cards, top card last.
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates an empty discard pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile from the given cards; the last card is on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Puts a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Takes the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile is empty.
    pub fn pop_top(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::EmptyPile)
    }

    /// Returns the top card without taking it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Removes every card except the top one and returns them.
    ///
    /// Used to rebuild the stock once it runs out.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        let keep_from = self.cards.len().saturating_sub(1);
        self.cards.drain(..keep_from).collect()
    }

    /// Returns the discarded cards, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
