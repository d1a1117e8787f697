pub mod dictionary;
pub mod engine;
pub mod scorer;
pub mod syllable;
pub mod types;
