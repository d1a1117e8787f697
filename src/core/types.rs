// src/core/types.rs
use serde::{Deserialize, Serialize};

/// The graded outcome of a single pronunciation attempt.
///
/// `similarity` is always in [0.0, 1.0]. `is_correct` is true when the
/// similarity reaches the acceptance threshold or one of the scoring
/// shortcuts (exact match, containment) applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PronunciationResult {
    pub is_correct: bool,
    pub similarity: f64,
}

/// What one call to `ReadingEngine::record_attempt` produced: the graded
/// result plus the points awarded for it (0 when the attempt failed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub result: PronunciationResult,
    pub points_earned: u64,
}
