// src/core/syllable.rs
//! Syllable segmentation: curated dictionary first, VCV heuristic fallback.

use crate::core::dictionary;

/// Splits a word into syllables.
///
/// The input may be raw UI text (a phrase, a scanned fragment, stray
/// punctuation); only the first run of alphabetic characters is used.
/// Returns an empty vec when the input contains no letters at all, and a
/// non-empty vec for every other input. Never panics.
///
/// Dictionary hits return the stored lower-case decomposition; the
/// heuristic fallback preserves the caller's casing.
pub fn split_syllables(word: &str) -> Vec<String> {
    // First maximal run of letters, so "hello, world!" tokenizes to "hello"
    // and punctuation-only input yields nothing.
    let token = match word.split(|c: char| !c.is_alphabetic()).find(|s| !s.is_empty()) {
        Some(t) => t,
        None => return Vec::new(),
    };

    let lower = token.to_lowercase();
    if let Some(entry) = dictionary::lookup(&lower) {
        return entry.iter().map(|s| s.to_string()).collect();
    }

    naive_split(token)
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Heuristic fallback: walk the word accumulating a syllable buffer and
/// flush it whenever a vowel-consonant-vowel pattern puts a boundary
/// between the vowel and the consonant that follows it.
///
/// O(n) over the character count. The fragments always concatenate back to
/// the input; if no boundary is found the whole word comes back as a single
/// syllable.
fn naive_split(word: &str) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = word.chars().collect();
    let mut syllables: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_was_vowel = false;

    for (i, &c) in chars.iter().enumerate() {
        let is_v = is_vowel(c);
        current.push(c);

        // A vowel right after a consonant opens a candidate boundary; it
        // becomes a split only if a consonant-then-vowel follows (VCV).
        if is_v && !prev_was_vowel && i > 0 {
            let next_is_consonant = matches!(chars.get(i + 1), Some(&n) if !is_vowel(n));
            let then_vowel = matches!(chars.get(i + 2), Some(&n) if is_vowel(n));
            if next_is_consonant && then_vowel {
                syllables.push(std::mem::take(&mut current));
            }
        }

        prev_was_vowel = is_v;
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    let cleaned: Vec<String> = syllables
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    // A single fragment means the heuristic found nothing worth showing.
    if cleaned.len() < 2 {
        vec![word.to_string()]
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_hit() {
        assert_eq!(split_syllables("fantastic"), vec!["fan", "tas", "tic"]);
    }

    #[test]
    fn test_dictionary_hit_is_case_insensitive() {
        assert_eq!(split_syllables("FANTASTIC"), vec!["fan", "tas", "tic"]);
        assert_eq!(split_syllables("Butterfly"), vec!["but", "ter", "fly"]);
    }

    #[test]
    fn test_single_syllable_collapse() {
        assert_eq!(split_syllables("school"), vec!["school"]);
    }

    #[test]
    fn test_vcv_fallback() {
        assert_eq!(split_syllables("banana"), vec!["ba", "na", "na"]);
    }

    #[test]
    fn test_fallback_preserves_casing() {
        assert_eq!(split_syllables("Banana"), vec!["Ba", "na", "na"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_syllables("").is_empty());
    }

    #[test]
    fn test_non_alphabetic_input() {
        assert!(split_syllables("123 !?").is_empty());
        assert!(split_syllables("   ").is_empty());
    }

    #[test]
    fn test_phrase_uses_first_word() {
        assert_eq!(split_syllables("school bus"), vec!["school"]);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        assert_eq!(split_syllables("\"fantastic!\""), vec!["fan", "tas", "tic"]);
    }

    #[test]
    fn test_single_character_word() {
        assert_eq!(split_syllables("a"), vec!["a"]);
        assert_eq!(split_syllables("b"), vec!["b"]);
    }

    #[test]
    fn test_word_with_no_vowels() {
        assert_eq!(split_syllables("tsk"), vec!["tsk"]);
    }

    #[test]
    fn test_no_split_found_returns_whole_word() {
        // No VCV pattern anywhere, so the word comes back intact.
        assert_eq!(split_syllables("kitten"), vec!["kitten"]);
    }

    #[test]
    fn test_reconstruction() {
        for word in ["banana", "tomato", "paper", "Bicycle", "avocado", "music"] {
            let joined: String = split_syllables(word).concat();
            assert_eq!(joined, word, "fragments must concatenate to the input");
        }
    }

    #[test]
    fn test_never_empty_for_letters() {
        for word in ["x", "rhythm", "Aa", "zzz", "queue"] {
            assert!(!split_syllables(word).is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(split_syllables("tomato"), split_syllables("tomato"));
    }
}
