//! Table configuration options.

use crate::deck::DealFrom;

/// Configuration options for a dealing [`Table`](crate::Table).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use linkdeck::{DealFrom, TableOptions};
///
/// let options = TableOptions::default()
///     .with_hands(4)
///     .with_deal_from(DealFrom::Head)
///     .with_shuffle_passes(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of hands to deal into.
    pub hands: usize,
    /// The end of the deck cards are dealt from.
    pub deal_from: DealFrom,
    /// How many times [`Table::shuffle`](crate::Table::shuffle) shuffles the deck.
    pub shuffle_passes: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hands: 3,
            deal_from: DealFrom::Tail,
            shuffle_passes: 1,
        }
    }
}

impl TableOptions {
    /// Sets the number of hands.
    #[must_use]
    pub const fn with_hands(mut self, hands: usize) -> Self {
        self.hands = hands;
        self
    }

    /// Sets the end of the deck cards are dealt from.
    #[must_use]
    pub const fn with_deal_from(mut self, deal_from: DealFrom) -> Self {
        self.deal_from = deal_from;
        self
    }

    /// Sets the number of shuffle passes.
    #[must_use]
    pub const fn with_shuffle_passes(mut self, passes: u8) -> Self {
        self.shuffle_passes = passes;
        self
    }
}
