// src/core/engine.rs
use crate::core::scorer;
use crate::core::syllable;
use crate::core::types::{AttemptOutcome, PronunciationResult};
use crate::persistence::{load_from_disk, save_to_disk};
use crate::progress::ProgressTracker;
use std::path::Path;

// The engine is a thin facade: the text algorithms are stateless free
// functions, so the only state here is the progress tracker and where to
// persist it.
pub struct ReadingEngine {
    pub progress: ProgressTracker,
    progress_path: Option<String>,
}

impl ReadingEngine {
    pub fn new() -> Self {
        Self {
            progress: ProgressTracker::new(),
            progress_path: None,
        }
    }

    /// Loads saved progress, or starts fresh when the file is missing or
    /// unreadable. Either way the engine remembers the path for saving.
    pub fn from_file_or_new(path: &str) -> Self {
        let mut engine = load_from_disk(Path::new(path)).unwrap_or_else(|_| Self::new());
        engine.progress_path = Some(path.to_string());
        engine
    }

    /// Syllable decomposition for display or read-aloud drills.
    pub fn split_syllables(&self, word: &str) -> Vec<String> {
        syllable::split_syllables(word)
    }

    /// Grades a transcript against the target word without touching
    /// progress state.
    pub fn check_pronunciation(&self, recognized: &str, target: &str) -> PronunciationResult {
        scorer::check_pronunciation(recognized, target)
    }

    /// Grades an attempt and applies it to the progress tracker: points on
    /// success, session-streak reset on a miss.
    pub fn record_attempt(&mut self, word: &str, recognized: &str, is_first_try: bool) -> AttemptOutcome {
        let result = scorer::check_pronunciation(recognized, word);
        let points_earned = if result.is_correct {
            let syllable_count = syllable::split_syllables(word).len().max(1);
            let today = chrono::Local::now().date_naive();
            self.progress.award(syllable_count, is_first_try, today)
        } else {
            self.progress.reset_session_streak();
            0
        };
        AttemptOutcome {
            result,
            points_earned,
        }
    }

    pub fn save_progress(&self) -> Result<(), std::io::Error> {
        if let Some(path) = &self.progress_path {
            save_to_disk(self, Path::new(path))
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}

impl Default for ReadingEngine {
    fn default() -> Self {
        Self::new()
    }
}
