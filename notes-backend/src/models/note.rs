use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A stored note. Field order is the order of the JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request body for creating or updating a note.
///
/// Any client-supplied `id` is ignored; ids are always assigned by the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A validated `NoteInput`: the title is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    /// `None` when the body omitted `content`
    pub content: Option<String>,
}

impl NoteInput {
    pub fn validate(self) -> Result<NoteDraft, ApiError> {
        match self.title {
            Some(title) if !title.is_empty() => Ok(NoteDraft {
                title,
                content: self.content,
            }),
            _ => Err(ApiError::MissingField("title")),
        }
    }
}

impl Note {
    /// Case-insensitive match of `term` against title and content
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }
}
