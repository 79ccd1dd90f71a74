//! The doubly-linked deck and its link operations.
//!
//! A [`Deck`] owns every node reachable from its head. Nodes are allocated
//! one at a time when a card is appended and are only ever relinked, never
//! copied, when cards move between decks.

use alloc::alloc::{Layout, alloc as allocate};
use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use rand::Rng;

use crate::card::Card;
use crate::error::DeckError;

mod deal;
mod iter;
mod shuffle;

pub use deal::DealFrom;
pub use iter::{IntoIter, Iter};

type Link = Option<NonNull<Node>>;

struct Node {
    card: Card,
    next: Link,
    prev: Link,
}

impl Node {
    /// Allocates an unlinked node, reporting allocator failure instead of aborting.
    fn alloc(card: Card) -> Result<NonNull<Self>, DeckError> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node` is not zero-sized.
        let raw = unsafe { allocate(layout) }.cast::<Self>();
        let node = NonNull::new(raw).ok_or(DeckError::AllocFailed)?;
        // SAFETY: `node` is a fresh allocation with the layout of `Node`.
        unsafe {
            node.as_ptr().write(Self {
                card,
                next: None,
                prev: None,
            });
        }
        Ok(node)
    }

    /// Frees an unlinked node and returns its card.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], be unreachable from any deck and
    /// not have been freed already.
    unsafe fn into_card(node: NonNull<Self>) -> Card {
        // SAFETY: the global allocator produced `node` with `Layout::new::<Node>()`,
        // which is the layout `Box<Node>` deallocates with.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.card
    }
}

/// An ordered, owned sequence of cards with O(1) access to both ends.
///
/// The deck is either empty (no head, no tail) or a chain in which every
/// node's `next` and `prev` agree and the ends point outward to nothing.
///
/// ```
/// use linkdeck::{Card, Deck, Rank, Suit};
///
/// let mut deck = Deck::new();
/// deck.append(Card::new(Suit::Spades, Rank::Nine))?;
/// deck.append(Card::new(Suit::Clubs, Rank::Ten))?;
/// deck.append(Card::new(Suit::Hearts, Rank::Ace))?;
/// assert_eq!(deck.to_string(), "[9S][10C][AH]");
///
/// assert_eq!(deck.pop_back(), Some(Card::new(Suit::Hearts, Rank::Ace)));
/// assert_eq!(deck.pop_back(), Some(Card::new(Suit::Clubs, Rank::Ten)));
/// assert_eq!(deck.to_string(), "[9S]");
/// # Ok::<(), linkdeck::DeckError>(())
/// ```
pub struct Deck {
    head: Link,
    tail: Link,
    len: usize,
    marker: PhantomData<Box<Node>>,
}

// SAFETY: a deck exclusively owns its nodes and cards are plain values, so
// moving or sharing a deck moves or shares nothing else.
unsafe impl Send for Deck {}
// SAFETY: shared access only reads through the chain.
unsafe impl Sync for Deck {}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Builds a deck from cards, in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if a card cannot be allocated. Cards
    /// appended before the failure are released.
    pub fn try_from_cards<I>(cards: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut deck = Self::new();
        for card in cards {
            deck.append(card)?;
        }
        Ok(deck)
    }

    /// Builds a deck of `count` independently random cards.
    ///
    /// Duplicates are possible.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if a card cannot be allocated.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self, DeckError> {
        let mut deck = Self::new();
        for _ in 0..count {
            deck.append(Card::random(rng))?;
        }
        Ok(deck)
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the card at the head.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        // SAFETY: the head is owned by this deck and lives as long as `&self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).card })
    }

    /// Returns the card at the tail.
    #[must_use]
    pub fn back(&self) -> Option<&Card> {
        // SAFETY: the tail is owned by this deck and lives as long as `&self`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).card })
    }

    /// Returns whether the deck holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.iter().any(|c| c == card)
    }

    /// Appends a card at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::AllocFailed`] if the node for the card cannot be
    /// allocated; the deck is unchanged in that case.
    pub fn append(&mut self, card: Card) -> Result<(), DeckError> {
        let node = Node::alloc(card)?;
        // SAFETY: `node` is fresh and unlinked.
        unsafe { self.link_back(node) };
        Ok(())
    }

    /// Removes and returns the card at the tail, or `None` if the deck is empty.
    pub fn pop_back(&mut self) -> Option<Card> {
        // SAFETY: an unlinked node is no longer reachable from the deck.
        self.unlink_back().map(|node| unsafe { Node::into_card(node) })
    }

    /// Removes and returns the card at the head, or `None` if the deck is empty.
    pub fn pop_front(&mut self) -> Option<Card> {
        // SAFETY: an unlinked node is no longer reachable from the deck.
        self.unlink_front().map(|node| unsafe { Node::into_card(node) })
    }

    /// Reverses the deck in place by swapping every node's links and the two ends.
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(node) = cursor {
            // SAFETY: every node on the chain is owned by this deck and we hold `&mut self`.
            unsafe {
                let node = &mut *node.as_ptr();
                mem::swap(&mut node.next, &mut node.prev);
                cursor = node.prev;
            }
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Moves every card of `src`, in order, in front of this deck's head.
    ///
    /// Only the two boundary nodes are relinked. `src` is left empty and usable.
    ///
    /// ```
    /// use linkdeck::{Card, Deck, Rank, Suit};
    ///
    /// let mut dst = Deck::try_from_cards([Card::new(Suit::Hearts, Rank::King)])?;
    /// let mut src = Deck::try_from_cards([Card::new(Suit::Spades, Rank::Nine)])?;
    /// dst.prepend(&mut src);
    /// assert_eq!(dst.to_string(), "[9S][KH]");
    /// assert!(src.is_empty());
    /// # Ok::<(), linkdeck::DeckError>(())
    /// ```
    pub fn prepend(&mut self, src: &mut Self) {
        let (Some(src_head), Some(src_tail)) = (src.head.take(), src.tail.take()) else {
            debug_assert_eq!(src.len, 0, "empty deck with a non-zero length");
            return;
        };

        match self.head {
            // SAFETY: `head` belongs to this deck and `src_tail` belonged to `src`;
            // the two chains are distinct because both decks are borrowed mutably.
            Some(head) => unsafe {
                (*src_tail.as_ptr()).next = Some(head);
                (*head.as_ptr()).prev = Some(src_tail);
            },
            None => self.tail = Some(src_tail),
        }
        self.head = Some(src_head);
        self.len += mem::take(&mut src.len);
    }

    /// Moves every card of `src` in front of this deck's head, consuming `src`.
    pub fn prepend_deck(&mut self, mut src: Self) {
        self.prepend(&mut src);
    }

    /// Releases every card and resets the deck to empty.
    ///
    /// Calling this on an empty deck does nothing; the deck stays usable.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        debug_assert!(self.tail.is_none() && self.len == 0);
    }

    /// Returns a front-to-back iterator over the cards.
    ///
    /// The iterator is double-ended, so `.rev()` walks tail to head.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_> {
        Iter::new(self.head, self.tail, self.len)
    }

    /// Links an unlinked node after the tail.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`] and must not be reachable from any deck.
    unsafe fn link_back(&mut self, node: NonNull<Node>) {
        // SAFETY: caller guarantees `node` is ours to link; the tail is owned by this deck.
        unsafe {
            (*node.as_ptr()).next = None;
            (*node.as_ptr()).prev = self.tail;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Detaches the tail node and hands ownership of it to the caller.
    fn unlink_back(&mut self) -> Option<NonNull<Node>> {
        self.tail.map(|node| {
            // SAFETY: the tail and its predecessor are owned by this deck.
            unsafe {
                self.tail = (*node.as_ptr()).prev;
                match self.tail {
                    Some(tail) => (*tail.as_ptr()).next = None,
                    None => self.head = None,
                }
                (*node.as_ptr()).prev = None;
            }
            self.len -= 1;
            node
        })
    }

    /// Detaches the head node and hands ownership of it to the caller.
    fn unlink_front(&mut self) -> Option<NonNull<Node>> {
        self.head.map(|node| {
            // SAFETY: the head and its successor are owned by this deck.
            unsafe {
                self.head = (*node.as_ptr()).next;
                match self.head {
                    Some(head) => (*head.as_ptr()).prev = None,
                    None => self.tail = None,
                }
                (*node.as_ptr()).next = None;
            }
            self.len -= 1;
            node
        })
    }
}

impl Drop for Deck {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Deck {}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders every card token in order, with no separators.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|card| write!(f, "{card}"))
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
