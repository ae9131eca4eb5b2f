//! Seed notes loaded into the store at startup.
//!
//! The default fixture is embedded in the binary; `NOTES_SEED_PATH` points
//! at a JSON array of notes to use instead.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::models::Note;

/// The 10-note fixture shipped with the server
const DEFAULT_SEED: &str = include_str!("../../data/notes.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate note id {0} in seed data")]
    DuplicateId(i64),
    #[error("Note {0} in seed data has an empty title")]
    EmptyTitle(i64),
    /// The largest id leaves no room for new notes
    #[error("Note id {0} in seed data is out of range")]
    IdOutOfRange(i64),
}

/// Load the embedded fixture
pub fn default_notes() -> Result<Vec<Note>, SeedError> {
    parse(DEFAULT_SEED)
}

/// Load seed notes from a JSON file
pub fn load_file(path: &Path) -> Result<Vec<Note>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw)
}

/// Load from `path` when given, otherwise the embedded fixture
pub fn load(path: Option<&Path>) -> Result<Vec<Note>, SeedError> {
    match path {
        Some(p) => {
            log::info!("[NOTES] Loading seed notes from {}", p.display());
            load_file(p)
        }
        None => default_notes(),
    }
}

pub fn parse(raw: &str) -> Result<Vec<Note>, SeedError> {
    let notes: Vec<Note> = serde_json::from_str(raw)?;
    validate(&notes)?;
    Ok(notes)
}

/// Every note needs a unique id with a successor and a non-empty title
pub fn validate(notes: &[Note]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(notes.len());
    for note in notes {
        if note.id.checked_add(1).is_none() {
            return Err(SeedError::IdOutOfRange(note.id));
        }
        if !seen.insert(note.id) {
            return Err(SeedError::DuplicateId(note.id));
        }
        if note.title.is_empty() {
            return Err(SeedError::EmptyTitle(note.id));
        }
    }
    Ok(())
}
