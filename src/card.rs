//! Card types and the `{Rank}{Suit}` text notation.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits carry no ranking in play. The declaration order (hearts, diamonds,
/// clubs, spades) is only used to iterate and display cards deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in listing order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the single-letter symbol used in card notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// Card rank, ordered from ace (low) to king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from ace to king.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the position of the rank in the A..K sequence (1 = Ace, 13 = King).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the point value of the rank. Face cards are not reduced.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Returns whether `other` directly follows this rank.
    #[must_use]
    pub const fn is_followed_by(self, other: Self) -> bool {
        self.number() + 1 == other.number()
    }

    /// Returns the notation symbol (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(symbol))
    }
}

/// A playing card.
///
/// Cards compare by value: a standard deck holds each combination once, so
/// two equal cards are the same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the deadwood value of the card (A=1 .. K=13).
    #[must_use]
    pub const fn value(self) -> u32 {
        self.rank.value()
    }

    /// Key used to list cards grouped by suit, then by rank.
    #[must_use]
    pub const fn display_key(self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// Returns the 52 cards of a standard deck, suit by suit.
    #[must_use]
    pub fn standard_deck() -> [Self; DECK_SIZE] {
        core::array::from_fn(|index| Self::new(Rank::ALL[index % 13], Suit::ALL[index / 13]))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let suit_symbol = chars.next_back().ok_or(ParseCardError::MalformedCardNotation)?;
        let suit = Suit::from_symbol(suit_symbol).ok_or(ParseCardError::MalformedCardNotation)?;
        let rank = Rank::from_symbol(chars.as_str()).ok_or(ParseCardError::MalformedCardNotation)?;
        Ok(Self::new(rank, suit))
    }
}

/// Sums the deadwood value of the given cards.
#[must_use]
pub fn total_value<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u32 {
    cards.into_iter().map(|card| card.value()).sum()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
