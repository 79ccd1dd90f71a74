//! Borrowing and owning iterators over a deck.

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::card::Card;

use super::{Deck, Link, Node};

/// Borrowing iterator over the cards of a [`Deck`], head to tail.
pub struct Iter<'a> {
    head: Link,
    tail: Link,
    len: usize,
    marker: PhantomData<&'a Node>,
}

// SAFETY: an `Iter` only hands out shared references into a deck it
// borrows, and `&Deck` is itself `Send` and `Sync`.
unsafe impl Send for Iter<'_> {}
// SAFETY: as above, nothing is reachable through `&Iter` but shared reads.
unsafe impl Sync for Iter<'_> {}

impl Iter<'_> {
    pub(super) const fn new(head: Link, tail: Link, len: usize) -> Self {
        Self {
            head,
            tail,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: the deck is borrowed for `'a`, so its nodes outlive the iterator.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.card
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: the deck is borrowed for the iterator's lifetime.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.card
        })
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over the cards of a [`Deck`], head to tail.
///
/// Cards not yet yielded are released when the iterator is dropped.
pub struct IntoIter {
    deck: Deck,
}

impl IntoIter {
    pub(super) const fn new(deck: Deck) -> Self {
        Self { deck }
    }
}

impl Iterator for IntoIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.deck.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deck.len(), Some(self.deck.len()))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deck.pop_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}
