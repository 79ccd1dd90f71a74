//! Walks a deck through every operation: random fill, unlink and reverse,
//! prepend, build and deal, shuffle.
//!
//! Run with `RUST_LOG=debug` to see the table log. An optional first
//! argument overrides the seed.

use std::env;
use std::error::Error;

use linkdeck::{Deck, Table, TableOptions};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DEFAULT_SEED: u64 = 9854;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("**********************Part 1**********************");
    let mut deck = Deck::random(10, &mut rng)?;
    println!("{deck}");

    println!("\n**********************Part 2**********************");
    for _ in 0..4 {
        if let Some(card) = deck.pop_back() {
            println!("Last: {card}");
        }
    }
    println!("Reversing the rest...");
    deck.reverse();
    println!("{deck}");

    println!("\n**********************Part 3**********************");
    for _ in 0..3 {
        let mut other = Deck::random(rng.random_range(1..=10), &mut rng)?;
        println!("d2: {other}");
        println!("Prepending d2 to d");
        deck.prepend(&mut other);
        println!("d : {deck}");
        assert!(other.is_empty(), "second deck should be empty");
    }
    deck.clear();

    println!("Building deck...");
    let mut table = Table::new(TableOptions::default().with_shuffle_passes(10), seed)?;
    println!("{}", table.deck());

    println!("\n**********************Part 4**********************");
    println!("Dealing cards...");
    table.deal()?;
    for (i, hand) in table.hands().iter().enumerate() {
        println!("Hand {}: {hand}", i + 1);
    }
    assert!(table.deck().is_empty(), "first deck should be empty");

    println!("\n**********************Part 5**********************");
    table.reset()?;
    println!("{}", table.deck());
    println!("Shuffling {} times...", table.options().shuffle_passes);
    table.shuffle()?;
    println!("{}", table.deck());

    Ok(())
}
