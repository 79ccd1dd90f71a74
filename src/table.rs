//! A seeded dealing session.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::{DealError, DeckError};
use crate::options::TableOptions;

/// A deck, the hands it is dealt into, and the generator that shuffles it.
///
/// The table cycles through build, shuffle, deal and gather. The same seed
/// and options always produce the same hands.
///
/// ```
/// use linkdeck::{Table, TableOptions};
///
/// let mut table = Table::new(TableOptions::default(), 42)?;
/// table.shuffle()?;
/// table.deal()?;
/// assert!(table.deck().is_empty());
/// assert_eq!(table.hands().iter().map(|hand| hand.len()).sum::<usize>(), 24);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Table {
    deck: Deck,
    hands: Vec<Deck>,
    options: TableOptions,
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table holding a full deck in canonical order and empty hands.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if the deck cannot be built.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, DeckError> {
        let deck = Deck::full()?;
        let hands = (0..options.hands).map(|_| Deck::new()).collect();
        log::debug!("new table: {} hands, seed {seed}", options.hands);

        Ok(Self {
            deck,
            hands,
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the undealt deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns all hands.
    #[must_use]
    pub fn hands(&self) -> &[Deck] {
        &self.hands
    }

    /// Returns the hand at `index`, if there is one.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Deck> {
        self.hands.get(index)
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of cards left in the undealt deck.
    #[must_use]
    pub const fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Shuffles the deck `shuffle_passes` times.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if a shuffle buffer cannot be allocated.
    pub fn shuffle(&mut self) -> Result<(), DeckError> {
        for _ in 0..self.options.shuffle_passes {
            self.deck.shuffle(&mut self.rng)?;
        }
        log::debug!(
            "shuffled {} cards {} time(s)",
            self.deck.len(),
            self.options.shuffle_passes
        );
        Ok(())
    }

    /// Deals the whole deck into the hands.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoHands`] if the table has no hands.
    pub fn deal(&mut self) -> Result<(), DealError> {
        let cards = self.deck.len();
        self.deck.deal_from(&mut self.hands, self.options.deal_from)?;
        log::debug!(
            "dealt {cards} cards into {} hands from the {:?}",
            self.hands.len(),
            self.options.deal_from
        );
        Ok(())
    }

    /// Returns every hand to the front of the deck, the first hand ending up on top.
    pub fn gather(&mut self) {
        for hand in self.hands.iter_mut().rev() {
            self.deck.prepend(hand);
        }
        log::debug!("gathered hands, deck holds {} cards", self.deck.len());
    }

    /// Destroys the deck and every hand, then rebuilds the canonical deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if the new deck cannot be built. The
    /// deck and hands are left as they were in that case.
    pub fn reset(&mut self) -> Result<(), DeckError> {
        let deck = Deck::full()?;
        for hand in &mut self.hands {
            hand.clear();
        }
        self.deck = deck;
        log::debug!("table reset");
        Ok(())
    }
}
