//! RNG tests for pontoon-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - что shuffle: перестановка (ни одна карта не теряется и не дублируется)
//! - работу Deck + shuffle + RandomSource

use std::collections::HashSet;

use pontoon_engine::domain::{Card, Deck};
use pontoon_engine::engine::RandomSource;
use pontoon_engine::infra::{DeterministicRng, SystemRng};

fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut DeterministicRng::from_seed(seed));
    deck.iter().copied().collect()
}

//
// TEST 1: same seed, two independent decks, identical order
//
#[test]
fn same_seed_same_deck_order() {
    assert_eq!(shuffled_deck(42), shuffled_deck(42), "Same seed must produce identical shuffle");
}

//
// TEST 2: different seeds produce different orders
//
#[test]
fn different_seeds_different_order() {
    assert_ne!(shuffled_deck(111), shuffled_deck(222));
}

//
// TEST 3: shuffle is a permutation of the standard deck
//
#[test]
fn shuffle_is_a_permutation() {
    let shuffled = shuffled_deck(555);
    assert_eq!(shuffled.len(), 52);

    let a: HashSet<Card> = shuffled.iter().copied().collect();
    let b: HashSet<Card> = Deck::standard_52().iter().copied().collect();
    assert_eq!(a.len(), 52, "Shuffled deck must contain 52 unique cards");
    assert_eq!(a, b);

    let standard: Vec<Card> = Deck::standard_52().iter().copied().collect();
    assert_ne!(shuffled, standard);
}

//
// TEST 4: SystemRng keeps the multiset too
//
#[test]
fn system_rng_shuffle_keeps_cards() {
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut SystemRng);

    let set: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(deck.len(), 52);
    assert_eq!(set.len(), 52);
}

//
// TEST 5: shuffle after draws only touches the remaining cards
//
#[test]
fn shuffle_after_draw_keeps_remaining() {
    let mut deck = Deck::standard_52();
    let drawn = deck.draw_n(4);
    deck.shuffle(&mut DeterministicRng::from_seed(9));

    assert_eq!(deck.len(), 48);
    for c in &drawn {
        assert!(!deck.contains(c));
    }
}

//
// TEST 6: empty and 1-element slices must not crash
//
#[test]
fn shuffle_tiny_slices_ok() {
    let mut rng = DeterministicRng::from_seed(42);

    let mut empty: Vec<u32> = vec![];
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![123];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![123]);

    let mut deck = Deck::empty();
    deck.shuffle(&mut rng);
    assert!(deck.is_empty());
}
