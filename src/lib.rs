// src/lib.rs

pub mod c_api;
pub mod core;
pub mod persistence;
pub mod progress;

pub use crate::core::engine::ReadingEngine;
pub use crate::core::scorer::check_pronunciation;
pub use crate::core::syllable::split_syllables;
pub use crate::core::types::PronunciationResult;
