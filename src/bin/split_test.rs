// Minimal manual harness for the syllable splitter and scorer.
// Run with: cargo run --bin split_test
// src/bin/split_test.rs
use reading_core::{check_pronunciation, split_syllables};

fn main() {
    let words = [
        "fantastic", "butterfly", "momentum", "school", "computer", "dinosaur",
        "elephant", "banana", "tomato", "paper", "kitten", "rhythm", "a", "",
    ];
    for word in words.iter() {
        println!("{:12} => {:?}", word, split_syllables(word));
    }

    println!();
    let attempts = [
        ("cat", "cat"),
        ("the cat sat", "cat"),
        ("kat", "cat"),
        ("", "cat"),
    ];
    for (recognized, target) in attempts.iter() {
        let r = check_pronunciation(recognized, target);
        println!(
            "{:12} vs {:4} => correct={} similarity={:.3}",
            recognized, target, r.is_correct, r.similarity
        );
    }
}
