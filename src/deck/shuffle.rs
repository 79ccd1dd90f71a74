//! Shuffling.

use alloc::vec::Vec;
use core::ptr::NonNull;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DeckError;

use super::{Deck, Node};

impl Deck {
    /// Shuffles the deck into a uniformly random order.
    ///
    /// The nodes are collected into a scratch buffer, permuted with
    /// Fisher-Yates and relinked in their new order, so no card is
    /// reallocated. The chain is only rewritten after the permutation is
    /// drawn, so a panicking generator leaves the deck as it was. Pass a seeded
    /// generator for a reproducible order:
    ///
    /// ```
    /// use linkdeck::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut a = Deck::full()?;
    /// let mut b = Deck::full()?;
    /// a.shuffle(&mut ChaCha8Rng::seed_from_u64(7))?;
    /// b.shuffle(&mut ChaCha8Rng::seed_from_u64(7))?;
    /// assert_eq!(a, b);
    /// # Ok::<(), linkdeck::DeckError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if the scratch buffer cannot be
    /// allocated; the deck is unchanged in that case.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        if self.len < 2 {
            return Ok(());
        }

        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(self.len)
            .map_err(|_| DeckError::AllocFailed)?;
        let mut cursor = self.head;
        while let Some(node) = cursor {
            nodes.push(node);
            // SAFETY: every node on the chain is owned by this deck.
            cursor = unsafe { (*node.as_ptr()).next };
        }

        nodes.shuffle(rng);

        let mut prev: Option<NonNull<Node>> = None;
        for &node in &nodes {
            // SAFETY: `nodes` holds each node of this deck exactly once and we hold `&mut self`.
            unsafe {
                (*node.as_ptr()).prev = prev;
                (*node.as_ptr()).next = None;
                if let Some(prev) = prev {
                    (*prev.as_ptr()).next = Some(node);
                }
            }
            prev = Some(node);
        }
        self.head = nodes.first().copied();
        self.tail = prev;
        Ok(())
    }
}
