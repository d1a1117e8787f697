// src/persistence.rs
use crate::core::engine::ReadingEngine;
use crate::progress::ProgressTracker;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;
use tempfile::NamedTempFile;

/// The on-disk state: just the progress tracker. The text algorithms are
/// stateless, so there is nothing else worth saving.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SerializableState {
    progress: ProgressTracker,
}

/// Writes the engine's progress to `path` atomically: serialize into a
/// temp file in the same directory, then rename over the destination.
pub fn save_to_disk(engine: &ReadingEngine, path: &Path) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        progress: engine.progress.clone(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);

    bincode::serialize_into(writer, &state)
        .map_err(|e| Error::new(std::io::ErrorKind::Other, e))?;

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<ReadingEngine, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    let mut engine = ReadingEngine::new();
    engine.progress = state.progress;

    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.bin");

        let mut engine = ReadingEngine::new();
        engine.record_attempt("butterfly", "butterfly", true);
        let points = engine.progress.total_points;
        assert!(points > 0);

        save_to_disk(&engine, &path).unwrap();
        let loaded = load_from_disk(&path).unwrap();
        assert_eq!(loaded.progress.total_points, points);
        assert_eq!(loaded.progress.daily_streak, engine.progress.daily_streak);
        assert_eq!(loaded.progress.badges, engine.progress.badges);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("progress.bin");
        save_to_disk(&ReadingEngine::new(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(load_from_disk(Path::new("/definitely/not/here.bin")).is_err());
    }
}
