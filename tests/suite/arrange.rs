//! Arrangement pipeline: dedup, normalize, fit, shuffle

use phrasewheel_core::{arrange, shuffle};
use phrasewheel_types::{Capacity, PLACEHOLDER, Seed, parse_phrase_list};

fn cap(n: usize) -> Capacity {
    Capacity::new(n).unwrap()
}

#[test]
fn always_fills_every_slot() {
    for (count, capacity) in [(0, 1), (3, 2), (10, 5), (200, 72)] {
        let raw: Vec<String> = (0..count).map(|i| format!("word {i}")).collect();
        let slots = arrange(&raw, cap(capacity), None);
        assert_eq!(slots.len(), capacity * 2);
    }
}

#[test]
fn pasted_text_to_card() {
    let raw = parse_phrase_list("  go  \n\n\nstop\nGO\n   \nthe end\n");
    let slots = arrange(&raw, cap(2), None);
    assert_eq!(slots.front(), ["Go", "Stop"]);
    assert_eq!(slots.back(), ["The End", PLACEHOLDER]);
}

#[test]
fn seeded_arrangement_reproduces_published_card() {
    let slots = arrange(&["Go", "Stop"], cap(2), Some(Seed::new(1)));
    assert_eq!(slots.as_slice(), ["Go", PLACEHOLDER, "Stop", PLACEHOLDER]);

    let slots = arrange(&["Go", "Stop"], cap(2), Some(Seed::new(7)));
    assert_eq!(slots.as_slice(), ["Go", "Stop", PLACEHOLDER, PLACEHOLDER]);
}

#[test]
fn shuffle_happens_after_padding() {
    // Placeholders take part in the shuffle, so they can land anywhere.
    let plain = arrange(&["a", "b", "c"], cap(4), None).into_inner();
    let seeded = arrange(&["a", "b", "c"], cap(4), Some(Seed::new(42)));
    assert_eq!(seeded.as_slice(), shuffle(plain, Seed::new(42)));
}

#[test]
fn different_seeds_usually_differ() {
    let raw: Vec<String> = (0..40).map(|i| format!("phrase {i}")).collect();
    let a = arrange(&raw, cap(20), Some(Seed::new(1)));
    let b = arrange(&raw, cap(20), Some(Seed::new(2)));
    assert_ne!(a.as_slice(), b.as_slice());
}
