//! Card integration tests.

use linkdeck::{Card, CardError, DECK_SIZE, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_renders_rank_then_suit() {
    assert_eq!(card(Suit::Spades, Rank::Nine).to_string(), "[9S]");
    assert_eq!(card(Suit::Clubs, Rank::Ten).to_string(), "[10C]");
    assert_eq!(card(Suit::Diamonds, Rank::Jack).to_string(), "[JD]");
    assert_eq!(card(Suit::Hearts, Rank::Queen).to_string(), "[QH]");
    assert_eq!(card(Suit::Spades, Rank::King).to_string(), "[KS]");
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "[AH]");
}

#[test]
fn codes_map_to_suits_and_ranks() {
    assert_eq!(
        Card::from_codes(1, 9).unwrap(),
        card(Suit::Spades, Rank::Nine)
    );
    assert_eq!(
        Card::from_codes(4, 14).unwrap(),
        card(Suit::Hearts, Rank::Ace)
    );
    assert_eq!(
        Card::from_codes(2, 10).unwrap(),
        card(Suit::Clubs, Rank::Ten)
    );

    for suit in Suit::ALL {
        assert_eq!(Suit::from_code(suit.code()).unwrap(), suit);
    }
    for rank in Rank::ALL {
        assert_eq!(Rank::from_value(rank.value()).unwrap(), rank);
    }
}

#[test]
fn out_of_range_codes_are_rejected() {
    assert_eq!(Card::from_codes(0, 9).unwrap_err(), CardError::InvalidSuit(0));
    assert_eq!(Card::from_codes(5, 9).unwrap_err(), CardError::InvalidSuit(5));
    assert_eq!(Card::from_codes(1, 8).unwrap_err(), CardError::InvalidRank(8));
    assert_eq!(
        Card::from_codes(1, 15).unwrap_err(),
        CardError::InvalidRank(15)
    );
    assert_eq!(CardError::InvalidRank(15).to_string(), "invalid rank value 15");
}

#[test]
fn deck_size_covers_every_combination() {
    assert_eq!(DECK_SIZE, 24);
    assert_eq!(Suit::ALL.len() * Rank::ALL.len(), DECK_SIZE);
}

#[test]
fn random_cards_are_reproducible_and_cover_the_range() {
    let mut a = ChaCha8Rng::seed_from_u64(9854);
    let mut b = ChaCha8Rng::seed_from_u64(9854);
    let first: Vec<Card> = (0..200).map(|_| Card::random(&mut a)).collect();
    let second: Vec<Card> = (0..200).map(|_| Card::random(&mut b)).collect();
    assert_eq!(first, second);

    for suit in Suit::ALL {
        assert!(first.iter().any(|c| c.suit == suit));
    }
    for rank in Rank::ALL {
        assert!(first.iter().any(|c| c.rank == rank));
    }
}
