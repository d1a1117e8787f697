// src/progress.rs
//! Points, streaks and badges for the practice flow.
//!
//! The tracker is plain bookkeeping over small integers. The current date
//! is passed in by the caller so the daily-streak logic stays deterministic;
//! only the engine facade reads the wall clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An earned achievement. `icon` is a hint for the host UI, not interpreted
/// by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressTracker {
    pub total_points: u64,
    /// Consecutive successful attempts in the current session. Resets on a
    /// miss and is not persisted across restarts by the engine.
    pub session_streak: u32,
    /// Consecutive calendar days with at least one successful attempt.
    pub daily_streak: u32,
    pub badges: Vec<Badge>,
    last_earned_day: Option<NaiveDate>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points for one successful attempt: a base by syllable count, a
    /// first-try bonus, and a session-streak multiplier capped at 2x.
    pub fn calculate_points(&self, syllable_count: usize, is_first_try: bool) -> u64 {
        let base_points: u64 = match syllable_count {
            0..=2 => 10,
            3 => 15,
            _ => 20,
        };
        let first_try_bonus: u64 = if is_first_try { 5 } else { 0 };
        let multiplier = 1.0 + (f64::from(self.session_streak) * 0.05).min(1.0);
        ((base_points + first_try_bonus) as f64 * multiplier) as u64
    }

    /// Records a successful attempt on `today`: adds points, extends the
    /// session streak, re-checks badges and updates the daily streak.
    /// Returns the points earned.
    pub fn award(&mut self, syllable_count: usize, is_first_try: bool, today: NaiveDate) -> u64 {
        let points = self.calculate_points(syllable_count, is_first_try);
        self.total_points += points;
        self.session_streak += 1;

        self.check_badges();
        self.update_daily_streak(today);

        points
    }

    pub fn reset_session_streak(&mut self) {
        self.session_streak = 0;
    }

    fn update_daily_streak(&mut self, today: NaiveDate) {
        match self.last_earned_day {
            Some(last) if last == today => return,
            Some(last) if today.signed_duration_since(last).num_days() == 1 => {
                self.daily_streak += 1;
            }
            // Gap of more than a day (or a clock that moved backwards):
            // the streak starts over.
            _ => self.daily_streak = 1,
        }
        self.last_earned_day = Some(today);
    }

    fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b.id == id)
    }

    fn earn(&mut self, id: &str, name: &str, icon: &str) {
        if !self.has_badge(id) {
            self.badges.push(Badge {
                id: id.to_string(),
                name: name.to_string(),
                icon: icon.to_string(),
            });
        }
    }

    fn check_badges(&mut self) {
        if self.total_points >= 10 {
            self.earn("first_word", "First Word", "star");
        }
        if self.session_streak >= 5 {
            self.earn("streak_5", "5 in a Row", "flame");
        }
        if self.session_streak >= 10 {
            self.earn("streak_10", "10 Streak", "flame");
        }
        if self.total_points >= 100 {
            self.earn("points_100", "100 Points", "trophy");
        }
        if self.total_points >= 500 {
            self.earn("points_500", "500 Points", "trophy");
        }
    }
}
