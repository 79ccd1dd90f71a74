//! A doubly-linked deck of playing cards with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that owns a chain of [`Card`]s and
//! supports appending, unlinking, reversing, prepending whole decks,
//! shuffling, and round-robin dealing into hands. A [`Table`] bundles a deck,
//! its hands and a seeded generator for reproducible deals.
//!
//! # Example
//!
//! ```
//! use linkdeck::Deck;
//!
//! let mut deck = Deck::full()?;
//! let mut hands = [Deck::new(), Deck::new(), Deck::new()];
//! deck.deal(&mut hands)?;
//! assert!(deck.is_empty());
//! assert_eq!(hands[0].to_string(), "[AH][JH][AD][JD][AC][JC][AS][JS]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DealFrom, Deck, IntoIter, Iter};
pub use error::{CardError, DealError, DeckError};
pub use options::TableOptions;
pub use table::Table;
