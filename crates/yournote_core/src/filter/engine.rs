//! Text/color filter evaluation.

use crate::model::note::{Note, NoteId};
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Note fields searched by the text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    pub titles: bool,
    pub contents: bool,
    pub tags: bool,
}

impl SearchFields {
    pub const ALL: Self = Self {
        titles: true,
        contents: true,
        tags: true,
    };

    pub const NONE: Self = Self {
        titles: false,
        contents: false,
        tags: false,
    };
}

impl Default for SearchFields {
    fn default() -> Self {
        Self::ALL
    }
}

/// User-entered filter criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub fields: SearchFields,
    /// Free-text query, matched as a case-insensitive substring.
    pub query: String,
    /// Selected colors, case-folded.
    colors: BTreeSet<String>,
}

impl FilterSpec {
    /// Creates the identity filter: every field enabled, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_fields(mut self, fields: SearchFields) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.colors = colors
            .into_iter()
            .map(|color| color.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn colors(&self) -> &BTreeSet<String> {
        &self.colors
    }

    /// Returns whether this spec filters nothing out.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.colors.is_empty()
    }
}

/// Computes the notes matching `spec`.
///
/// Rules:
/// - empty query and no colors: the input, unchanged;
/// - only one criterion set: that criterion's matches;
/// - both set: intersection by id in text-match order, empty as soon as
///   either side matches nothing.
pub fn filter_notes(notes: &[Note], spec: &FilterSpec) -> Vec<Note> {
    if spec.is_identity() {
        return notes.to_vec();
    }

    let result = if spec.colors.is_empty() {
        text_matches(notes, spec)
    } else if spec.query.is_empty() {
        color_matches(notes, spec.colors())
    } else {
        let by_text = text_matches(notes, spec);
        let by_color = color_matches(notes, spec.colors());
        if by_text.is_empty() || by_color.is_empty() {
            Vec::new()
        } else {
            let color_ids: HashSet<&NoteId> = by_color.iter().map(|note| &note.id).collect();
            by_text
                .into_iter()
                .filter(|note| color_ids.contains(&note.id))
                .collect()
        }
    };

    debug!(
        "event=filter_apply module=filter status=ok input={} output={} colors={} query_len={}",
        notes.len(),
        result.len(),
        spec.colors.len(),
        spec.query.chars().count()
    );
    result
}

/// Notes whose enabled fields contain the query.
///
/// Fields are scanned title, content, tags; a note keeps the position of its
/// first matching field. An empty query matches nothing.
pub fn text_matches(notes: &[Note], spec: &FilterSpec) -> Vec<Note> {
    if spec.query.is_empty() {
        return Vec::new();
    }

    let needle = spec.query.to_lowercase();
    let contains = |value: &str| value.to_lowercase().contains(needle.as_str());
    let mut matched: Vec<&Note> = Vec::new();

    if spec.fields.titles {
        matched.extend(
            notes
                .iter()
                .filter(|note| note.title.as_deref().is_some_and(contains)),
        );
    }
    if spec.fields.contents {
        matched.extend(
            notes
                .iter()
                .filter(|note| note.content.as_deref().is_some_and(contains)),
        );
    }
    if spec.fields.tags {
        matched.extend(
            notes
                .iter()
                .filter(|note| note.tags.iter().any(|tag| contains(tag.as_str()))),
        );
    }

    unique_by_id(matched)
}

/// Notes whose color is one of `colors` (case-folded). Notes without a color
/// never match.
pub fn color_matches(notes: &[Note], colors: &BTreeSet<String>) -> Vec<Note> {
    if colors.is_empty() {
        return Vec::new();
    }

    unique_by_id(
        notes
            .iter()
            .filter(|note| {
                note.color
                    .as_ref()
                    .is_some_and(|color| colors.contains(&color.key()))
            })
            .collect(),
    )
}

fn unique_by_id(notes: Vec<&Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(notes.len());
    for note in notes {
        if seen.insert(&note.id) {
            unique.push(note.clone());
        }
    }
    unique
}

/// Visible notes split by ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerPartition {
    /// Notes owned by the current user.
    pub mine: Vec<Note>,
    /// Notes other users shared with the current user.
    pub shared: Vec<Note>,
}

/// Splits `notes` into those owned by `owner` and the rest, keeping order.
pub fn partition_by_owner(notes: &[Note], owner: &str) -> OwnerPartition {
    let (mine, shared): (Vec<Note>, Vec<Note>) = notes
        .iter()
        .cloned()
        .partition(|note| note.is_owned_by(owner));
    OwnerPartition { mine, shared }
}
