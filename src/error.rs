//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while building or rearranging a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The allocator could not provide memory for a card or scratch buffer.
    #[error("allocation failed")]
    AllocFailed,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No hands to deal into.
    #[error("no hands to deal into")]
    NoHands,
}

/// Errors that can occur when decoding numeric card codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit code outside 1..=4.
    #[error("invalid suit code {0}")]
    InvalidSuit(u8),
    /// Rank value outside 9..=14.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
}
