//! Card types and rendering.

use core::fmt;

use rand::Rng;

use crate::error::CardError;

/// Card suit, in exercise order (codes 1 through 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Diamonds, Self::Hearts];

    /// Returns the suit for a numeric code (1 = Spades ... 4 = Hearts).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if `code` is outside `1..=4`.
    pub const fn from_code(code: u8) -> Result<Self, CardError> {
        match code {
            1 => Ok(Self::Spades),
            2 => Ok(Self::Clubs),
            3 => Ok(Self::Diamonds),
            4 => Ok(Self::Hearts),
            _ => Err(CardError::InvalidSuit(code)),
        }
    }

    /// Returns the numeric code of the suit.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the single-letter glyph used when rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Card rank, from nine up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
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
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank for a numeric value (9 = Nine ... 14 = Ace).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `value` is outside `9..=14`.
    pub const fn from_value(value: u8) -> Result<Self, CardError> {
        match value {
            9 => Ok(Self::Nine),
            10 => Ok(Self::Ten),
            11 => Ok(Self::Jack),
            12 => Ok(Self::Queen),
            13 => Ok(Self::King),
            14 => Ok(Self::Ace),
            _ => Err(CardError::InvalidRank(value)),
        }
    }

    /// Returns the numeric value of the rank.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 9
    }

    /// Returns the glyph used when rendering. Ten is the only two-character glyph.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A playing card.
///
/// Renders as a bracketed token, rank first:
///
/// ```
/// use linkdeck::{Card, Rank, Suit};
///
/// assert_eq!(Card::new(Suit::Hearts, Rank::Ace).to_string(), "[AH]");
/// assert_eq!(Card::new(Suit::Clubs, Rank::Ten).to_string(), "[10C]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a card from numeric suit and rank codes.
    ///
    /// # Errors
    ///
    /// Returns an error if either code is out of range.
    pub const fn from_codes(suit: u8, rank: u8) -> Result<Self, CardError> {
        let suit = match Suit::from_code(suit) {
            Ok(suit) => suit,
            Err(err) => return Err(err),
        };
        match Rank::from_value(rank) {
            Ok(rank) => Ok(Self::new(suit, rank)),
            Err(err) => Err(err),
        }
    }

    /// Draws a card with uniformly random suit and rank.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
        let rank = Rank::ALL[rng.random_range(0..Rank::ALL.len())];
        Self::new(suit, rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.rank, self.suit)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
