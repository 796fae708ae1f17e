//! Note list persistence for the demo board
//!
//! The grid never persists anything itself. The board saves whatever order
//! `on_order_change` hands it, as pretty RON under the platform data dir.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::APP_DIR;
use crate::error::StoreError;
use crate::grid::GridItem;

/// One note card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Note {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), body: body.into() }
    }
}

impl GridItem for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

/// On-disk file layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct NoteFile {
    notes: Vec<Note>,
}

/// RON-backed note list
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/notegrid/notes.ron`
    pub fn default_location() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDirectory)?;
        Ok(Self::new(dir.join(APP_DIR).join("notes.ron")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved notes. A missing file is an empty board.
    pub fn load(&self) -> Result<Vec<Note>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let file: NoteFile = ron::from_str(&contents)?;
        Ok(file.notes)
    }

    /// Save notes in the given order, creating parent directories
    pub fn save(&self, notes: &[Note]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = NoteFile { notes: notes.to_vec() };
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(&file, pretty)?;
        fs::write(&self.path, contents)?;
        info!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }
}

/// Starter notes for a fresh board
pub fn sample_notes() -> Vec<Note> {
    vec![
        Note::new("groceries", "Groceries", "Oats, apples, coffee beans"),
        Note::new("reading", "Reading plan", "Psalms 23, John 1"),
        Note::new("workout", "Workout", "3x10 squats, 20 min run"),
        Note::new("ideas", "Ideas", "Long-press a card, then drag it"),
        Note::new("calls", "Calls", "Dentist on Tuesday"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(dir.path().join("notes.ron"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_keeps_order() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::new(dir.path().join("deep").join("notes.ron"));

        let mut notes = sample_notes();
        notes.reverse();
        store.save(&notes).unwrap();

        assert_eq!(store.load().unwrap(), notes);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.ron");
        fs::write(&path, "(notes: [").unwrap();
        assert!(matches!(NoteStore::new(path).load(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let notes = sample_notes();
        assert!(crate::grid::PositionMap::from_ids(notes.iter().map(|n| n.id())).is_ok());
    }
}
