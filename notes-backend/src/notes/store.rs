//! NoteStore — in-memory, insertion-ordered note storage
//!
//! All workers share one store; every operation takes the lock exactly once,
//! so each read or mutation is atomic with respect to other requests.

use parking_lot::RwLock;

use crate::models::{Note, NoteDraft};

/// First id handed out by an empty store
pub const FIRST_ID: i64 = 1000;

struct Inner {
    notes: Vec<Note>,
    next_id: i64,
}

/// NoteStore wrapping an ordered `Vec<Note>` behind a RwLock
pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl NoteStore {
    /// Create a store holding `notes` in the given order.
    ///
    /// Callers guarantee unique ids (see `seed::validate`). The next assigned id
    /// is one past the largest seeded id.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let next_id = notes
            .iter()
            .map(|n| n.id.saturating_add(1))
            .max()
            .unwrap_or(FIRST_ID)
            .max(FIRST_ID);

        Self {
            inner: RwLock::new(Inner { notes, next_id }),
        }
    }

    /// List notes in insertion order, optionally filtered by a search term
    pub fn list(&self, search_term: Option<&str>) -> Vec<Note> {
        let inner = self.inner.read();
        match search_term.filter(|t| !t.is_empty()) {
            Some(term) => inner.notes.iter().filter(|n| n.matches(term)).cloned().collect(),
            None => inner.notes.clone(),
        }
    }

    pub fn get(&self, id: i64) -> Option<Note> {
        self.inner.read().notes.iter().find(|n| n.id == id).cloned()
    }

    /// Append a new note with a freshly assigned id.
    ///
    /// Returns `None` once the id space is exhausted; `i64::MAX` is never handed out.
    pub fn create(&self, draft: NoteDraft) -> Option<Note> {
        let mut inner = self.inner.write();

        let id = inner.next_id;
        let Some(following) = id.checked_add(1) else {
            log::error!("[NOTES] Note ids exhausted at {}", id);
            return None;
        };

        let note = Note {
            id,
            title: draft.title,
            content: draft.content.unwrap_or_default(),
        };
        inner.next_id = following;
        inner.notes.push(note.clone());

        log::info!("[NOTES] Created note {}", note.id);
        Some(note)
    }

    /// Replace the title (and content, when supplied) of an existing note in place
    pub fn update(&self, id: i64, draft: NoteDraft) -> Option<Note> {
        let mut inner = self.inner.write();
        let note = inner.notes.iter_mut().find(|n| n.id == id)?;

        note.title = draft.title;
        if let Some(content) = draft.content {
            note.content = content;
        }

        log::info!("[NOTES] Updated note {}", id);
        Some(note.clone())
    }

    /// Remove a note, returning whether anything was removed
    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.write();
        let before = inner.notes.len();
        inner.notes.retain(|n| n.id != id);
        let removed = inner.notes.len() != before;

        if removed {
            log::info!("[NOTES] Deleted note {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.read().notes.len()
    }
}
