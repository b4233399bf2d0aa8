//! A Gin Rummy meld, deadwood and scoring engine with optional `no_std` support.
//!
//! The core evaluates a hand in three passes: [`find_candidate_melds`] lists
//! every run and set, [`select_best_grouping`] picks a disjoint grouping of
//! the highest melded value, and [`classify_deadwood`] splits the rest into
//! possible and complete deadwood. [`HandAnalysis`] runs all three.
//!
//! Around the core, [`Round`] plays one two-player round (draw, discard,
//! knock, gin) and scores it with layoff, and [`Bot`] implements a greedy
//! computer player.
//!
//! # Example
//!
//! ```
//! use ginrs::{Card, HandAnalysis, SelectionStrategy};
//!
//! let cards: Vec<Card> = ["7S", "8S", "9S", "KH", "KD", "KC", "2D", "3D", "4D", "AC"]
//!     .iter()
//!     .map(|text| text.parse().unwrap())
//!     .collect();
//! let analysis = HandAnalysis::of_cards(&cards, SelectionStrategy::Pivot);
//! assert_eq!(analysis.deadwood_total(), 1);
//! assert!(analysis.is_valid_knock(10));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod analysis;
pub mod bot;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod meld;
pub mod options;
pub mod result;
pub mod scoring;

// Re-export main types
pub use analysis::{HandAnalysis, is_gin, is_valid_knock};
pub use bot::{Bot, BotAction, DrawChoice};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, DiscardPile};
pub use error::{ActionError, DeckError, HandError, ParseCardError, PileError, SettleError};
pub use game::{Declaration, Round, RoundState, Seat, TurnPhase};
pub use hand::Hand;
pub use meld::{
    Deadwood, Grouping, Meld, MeldKind, Selection, SelectionStrategy, classify_deadwood,
    find_candidate_melds, select_best_grouping,
};
pub use options::GameOptions;
pub use result::{Award, Layoff, RoundOutcome, RoundResult, ScoreBoard};
pub use scoring::{Showdown, layoff, score_declaration};
