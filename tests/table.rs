//! Table integration tests.

use linkdeck::{DECK_SIZE, DealError, DealFrom, Deck, Table, TableOptions};

fn hand_strings(table: &Table) -> Vec<String> {
    table.hands().iter().map(ToString::to_string).collect()
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_hands(5)
        .with_deal_from(DealFrom::Head)
        .with_shuffle_passes(10);

    assert_eq!(options.hands, 5);
    assert_eq!(options.deal_from, DealFrom::Head);
    assert_eq!(options.shuffle_passes, 10);

    let defaults = TableOptions::default();
    assert_eq!(defaults.hands, 3);
    assert_eq!(defaults.deal_from, DealFrom::Tail);
    assert_eq!(defaults.shuffle_passes, 1);
}

#[test]
fn new_table_holds_a_full_deck() {
    let table = Table::new(TableOptions::default(), 1).unwrap();
    assert_eq!(table.deck(), &Deck::full().unwrap());
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert_eq!(table.hands().len(), 3);
    assert!(table.hands().iter().all(Deck::is_empty));
    assert!(table.hand(2).is_some());
    assert!(table.hand(3).is_none());
}

#[test]
fn unshuffled_deal_matches_deck_deal() {
    let mut table = Table::new(TableOptions::default(), 1).unwrap();
    table.deal().unwrap();
    assert_eq!(table.cards_remaining(), 0);
    assert_eq!(
        table.hand(0).unwrap().to_string(),
        "[AH][JH][AD][JD][AC][JC][AS][JS]"
    );

    let mut head_table =
        Table::new(TableOptions::default().with_deal_from(DealFrom::Head), 1).unwrap();
    head_table.deal().unwrap();
    assert_eq!(
        head_table.hand(0).unwrap().to_string(),
        "[9S][QS][9C][QC][9D][QD][9H][QH]"
    );
}

#[test]
fn same_seed_same_hands() {
    let options = TableOptions::default().with_hands(4).with_shuffle_passes(10);
    let mut a = Table::new(options.clone(), 9854).unwrap();
    let mut b = Table::new(options.clone(), 9854).unwrap();
    let mut c = Table::new(options, 9855).unwrap();

    for table in [&mut a, &mut b, &mut c] {
        table.shuffle().unwrap();
        table.deal().unwrap();
    }

    assert_eq!(hand_strings(&a), hand_strings(&b));
    assert_ne!(hand_strings(&a), hand_strings(&c));
    assert!(a.hands().iter().all(|hand| hand.len() == DECK_SIZE / 4));
}

#[test]
fn zero_shuffle_passes_keep_canonical_order() {
    let mut table = Table::new(TableOptions::default().with_shuffle_passes(0), 3).unwrap();
    table.shuffle().unwrap();
    assert_eq!(table.deck(), &Deck::full().unwrap());
}

#[test]
fn gather_restores_hands_in_order() {
    let mut table = Table::new(TableOptions::default(), 5).unwrap();
    table.shuffle().unwrap();
    table.deal().unwrap();

    let expected: String = hand_strings(&table).concat();
    table.gather();

    assert_eq!(table.deck().to_string(), expected);
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert!(table.hands().iter().all(Deck::is_empty));

    // a second round deals the gathered deck again
    table.deal().unwrap();
    assert_eq!(table.cards_remaining(), 0);
}

#[test]
fn reset_rebuilds_the_canonical_deck() {
    let mut table = Table::new(TableOptions::default(), 8).unwrap();
    table.shuffle().unwrap();
    table.deal().unwrap();
    table.reset().unwrap();

    assert_eq!(table.deck(), &Deck::full().unwrap());
    assert!(table.hands().iter().all(Deck::is_empty));
}

#[test]
fn deal_errors_surface_from_the_table() {
    let mut none = Table::new(TableOptions::default().with_hands(0), 1).unwrap();
    assert_eq!(none.deal().unwrap_err(), DealError::NoHands);
    assert_eq!(none.cards_remaining(), DECK_SIZE);

}

#[test]
fn crowded_table_deals_every_card() {
    let mut table = Table::new(TableOptions::default().with_hands(30), 1).unwrap();
    table.shuffle().unwrap();
    table.deal().unwrap();

    assert_eq!(table.cards_remaining(), 0);
    assert_eq!(
        table.hands().iter().map(Deck::len).sum::<usize>(),
        DECK_SIZE
    );
    assert!(table.hands()[..DECK_SIZE].iter().all(|hand| hand.len() == 1));
    assert!(table.hands()[DECK_SIZE..].iter().all(Deck::is_empty));

    table.gather();
    assert_eq!(table.cards_remaining(), DECK_SIZE);
}
