//! Building the canonical deck and dealing it into hands.

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError};

use super::Deck;

/// The end of the deck cards are taken from while dealing.
///
/// The choice decides which physical cards land in which hand. With
/// [`DealFrom::Tail`] the first hand receives the last card of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealFrom {
    /// Take cards from the tail (the last card first).
    #[default]
    Tail,
    /// Take cards from the head (the first card first).
    Head,
}

impl Deck {
    /// Builds the full 24-card deck: every suit in order, each with ranks ascending.
    ///
    /// ```
    /// use linkdeck::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::full()?;
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert!(deck.to_string().starts_with("[9S][10S][JS][QS][KS][AS][9C]"));
    /// # Ok::<(), linkdeck::DeckError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if a card cannot be allocated.
    pub fn full() -> Result<Self, DeckError> {
        let deck = Self::try_from_cards(
            Suit::ALL
                .into_iter()
                .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank))),
        )?;
        debug_assert_eq!(deck.len(), DECK_SIZE);
        Ok(deck)
    }

    /// Deals every card into `hands` round-robin, taking cards from the tail.
    ///
    /// Equivalent to [`Deck::deal_from`] with [`DealFrom::Tail`].
    ///
    /// # Errors
    ///
    /// See [`Deck::deal_from`].
    pub fn deal(&mut self, hands: &mut [Self]) -> Result<(), DealError> {
        self.deal_from(hands, DealFrom::Tail)
    }

    /// Deals every card into `hands` round-robin.
    ///
    /// The first card taken goes to the tail of `hands[0]`, the second to
    /// `hands[1]`, wrapping after the last hand, until this deck is empty.
    /// Nodes are relinked, not reallocated, so dealing cannot fail midway.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoHands`] if `hands` is empty. The deck is
    /// untouched in that case. Hands beyond the number of cards stay empty.
    pub fn deal_from(&mut self, hands: &mut [Self], from: DealFrom) -> Result<(), DealError> {
        if hands.is_empty() {
            return Err(DealError::NoHands);
        }

        let mut index = 0;
        loop {
            let node = match from {
                DealFrom::Tail => self.unlink_back(),
                DealFrom::Head => self.unlink_front(),
            };
            let Some(node) = node else {
                break;
            };
            log::trace!("deal card to hand {index}");
            // SAFETY: `node` was just unlinked from this deck, which is a
            // different deck from every hand because both are borrowed mutably.
            unsafe { hands[index].link_back(node) };
            index = (index + 1) % hands.len();
        }

        Ok(())
    }
}
