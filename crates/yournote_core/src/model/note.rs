//! Note domain model.
//!
//! # Responsibility
//! - Define the note record produced by the note repository collaborator.
//! - Provide identity helpers used by id-keyed set operations.
//!
//! # Invariants
//! - `id` is stable and never reassigned to another note.
//! - `just_created` is transient UI state and is never serialized.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable, opaque note identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wraps an identifier issued by the note store.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Opaque color tag. Comparison ignores case; any string is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value as delivered by the store.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Case-folded form used for matching.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Color {}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Note record as seen by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Attachment filenames.
    #[serde(default)]
    pub files: Vec<String>,
    /// Owner identifier (account email in the hosted app).
    #[serde(default)]
    pub owner: String,
    /// Set by callers on a note they just created, so the UI can open it.
    #[serde(skip)]
    pub just_created: bool,
}

impl Note {
    /// Creates an empty note owned by `owner`.
    pub fn new(id: NoteId, owner: impl Into<String>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            color: None,
            tags: Vec::new(),
            files: Vec::new(),
            owner: owner.into(),
            just_created: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns whether the note belongs to `owner`.
    pub fn is_owned_by(&self, owner: &str) -> bool {
        self.owner == owner
    }

    /// Removes the first attachment named `filename`.
    ///
    /// Returns `false` when no such attachment exists.
    pub fn remove_file(&mut self, filename: &str) -> bool {
        match self.files.iter().position(|file| file == filename) {
            Some(index) => {
                self.files.remove(index);
                true
            }
            None => false,
        }
    }
}
