// src/core/dictionary.rs
//! Curated syllable dictionary.
//!
//! A small fixed table of words with hand-checked decompositions. The
//! heuristic splitter gets the VCV cases roughly right but trips over
//! silent-e words, digraphs and consonant clusters, so the words used in
//! the guided exercises are pinned here. Extend the table to add words;
//! the lookup logic never changes.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Keys are lower-case; values are the stored decomposition returned
/// verbatim on a hit (also lower-case, regardless of the caller's casing).
static SYLLABLE_DICT: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert("fantastic", &["fan", "tas", "tic"]);
        map.insert("butterfly", &["but", "ter", "fly"]);
        map.insert("momentum", &["mo", "men", "tum"]);
        map.insert("school", &["school"]);
        map.insert("computer", &["com", "pu", "ter"]);
        map.insert("dinosaur", &["di", "no", "saur"]);
        map.insert("elephant", &["el", "e", "phant"]);
        map
    });

/// Looks up a curated decomposition. The caller is expected to pass a
/// lower-cased token.
pub fn lookup(word: &str) -> Option<&'static [&'static str]> {
    SYLLABLE_DICT.get(word).copied()
}
