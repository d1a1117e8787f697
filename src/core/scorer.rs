// src/core/scorer.rs
//! Pronunciation grading: exact match, containment shortcut, then
//! normalized Levenshtein similarity.

use crate::core::types::PronunciationResult;

/// An attempt passes when its similarity reaches this value (inclusive).
pub const CORRECT_THRESHOLD: f64 = 0.80;

/// Similarity assigned when the target word appears inside a longer
/// transcript ("the cat sat" vs "cat").
const CONTAINMENT_SIMILARITY: f64 = 0.95;

/// Grades a speech-recognizer transcript against the target word.
///
/// Checks run in priority order: exact match after trim + lower-case,
/// then target-contained-in-transcript (speech recognizers often pick up
/// surrounding words), then edit-distance similarity. Note the containment
/// check only runs one way; `check_pronunciation(a, b)` and
/// `check_pronunciation(b, a)` can disagree even though the underlying
/// distance is symmetric.
///
/// Total function: any pair of strings, including empty ones, produces a
/// result with similarity in [0.0, 1.0].
pub fn check_pronunciation(recognized: &str, target: &str) -> PronunciationResult {
    let recognized = recognized.trim().to_lowercase();
    let target = target.trim().to_lowercase();

    if recognized == target {
        return PronunciationResult {
            is_correct: true,
            similarity: 1.0,
        };
    }

    // The empty target is a substring of everything; don't let it pass.
    if !target.is_empty() && recognized.contains(&target) {
        return PronunciationResult {
            is_correct: true,
            similarity: CONTAINMENT_SIMILARITY,
        };
    }

    let similarity = similarity(&recognized, &target);
    PronunciationResult {
        is_correct: similarity >= CORRECT_THRESHOLD,
        similarity,
    }
}

/// Normalized similarity: `1 - distance / max(len_a, len_b)` over character
/// counts. Two empty strings compare as identical (1.0), which also keeps
/// the division well-defined.
fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

/// Classic single-character insert/delete/substitute edit distance.
///
/// Full (n+1) x (m+1) DP table with unit costs. O(n*m) time and space;
/// the inputs here are words or short transcripts, not documents.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Fast paths; also keeps the table loops from ever seeing a zero bound.
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}
