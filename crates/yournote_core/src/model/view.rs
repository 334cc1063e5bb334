//! View domain model.
//!
//! # Responsibility
//! - Represent the reserved "All notes" view as its own variant.
//! - Validate named views at construction and deserialization time.
//!
//! # Invariants
//! - A named view is never called "All notes" (case-insensitive).
//! - View names are trimmed, whitespace-collapsed and unique per collection.
//! - Membership lists never contain the same note id twice.

use crate::model::note::NoteId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display name of the implicit view holding every note of the user.
pub const ALL_NOTES_VIEW_NAME: &str = "All notes";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Validation and lookup errors for views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Name is empty after trimming.
    BlankName,
    /// Name collides with the reserved "All notes" view.
    ReservedName,
    /// Another view already uses this name.
    DuplicateName(String),
    /// No named view with this name exists.
    ViewNotFound(String),
    /// Operation is not allowed on the reserved view.
    ReservedView,
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "view name must not be blank"),
            Self::ReservedName => write!(f, "view name `{ALL_NOTES_VIEW_NAME}` is reserved"),
            Self::DuplicateName(name) => write!(f, "view already exists: `{name}`"),
            Self::ViewNotFound(name) => write!(f, "view not found: `{name}`"),
            Self::ReservedView => {
                write!(f, "membership of `{ALL_NOTES_VIEW_NAME}` cannot be changed")
            }
        }
    }
}

impl Error for ViewError {}

/// Normalizes a user-entered view name.
///
/// Rejects blank names and the reserved name.
pub fn normalize_view_name(value: &str) -> Result<String, ViewError> {
    let collapsed = WHITESPACE_RE.replace_all(value.trim(), " ");
    if collapsed.is_empty() {
        return Err(ViewError::BlankName);
    }
    if is_reserved_name(&collapsed) {
        return Err(ViewError::ReservedName);
    }
    Ok(collapsed.into_owned())
}

/// Returns whether `name` refers to the reserved view.
pub fn is_reserved_name(name: &str) -> bool {
    name_key(name) == ALL_NOTES_VIEW_NAME.to_lowercase()
}

/// Comparison key for view names: trimmed, whitespace-collapsed, lowercase.
fn name_key(name: &str) -> String {
    WHITESPACE_RE.replace_all(name.trim(), " ").to_lowercase()
}

/// Wire shape of a view as stored by the view repository.
#[derive(Debug, Clone, Deserialize)]
struct RawView {
    name: String,
    #[serde(default)]
    notes: Vec<NoteId>,
}

/// User-defined view: a name plus an ordered list of note ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawView")]
pub struct NamedView {
    name: String,
    notes: Vec<NoteId>,
}

impl NamedView {
    /// Creates an empty view after name validation.
    pub fn new(name: &str) -> Result<Self, ViewError> {
        Ok(Self {
            name: normalize_view_name(name)?,
            notes: Vec::new(),
        })
    }

    /// Creates a view with initial members; repeated ids keep the first slot.
    pub fn with_notes<I>(name: &str, notes: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = NoteId>,
    {
        let mut view = Self::new(name)?;
        for note_id in notes {
            view.push_note(note_id);
        }
        Ok(view)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Member note ids in insertion order.
    pub fn notes(&self) -> &[NoteId] {
        self.notes.as_slice()
    }

    pub fn contains(&self, note_id: &NoteId) -> bool {
        self.notes.contains(note_id)
    }

    /// Appends `note_id` unless it is already a member.
    pub(crate) fn push_note(&mut self, note_id: NoteId) -> bool {
        if self.contains(&note_id) {
            return false;
        }
        self.notes.push(note_id);
        true
    }

    /// Removes `note_id`; membership lists hold at most one occurrence.
    pub(crate) fn drop_note(&mut self, note_id: &NoteId) -> bool {
        match self.notes.iter().position(|current| current == note_id) {
            Some(index) => {
                self.notes.remove(index);
                true
            }
            None => false,
        }
    }
}

impl TryFrom<RawView> for NamedView {
    type Error = ViewError;

    fn try_from(value: RawView) -> Result<Self, Self::Error> {
        Self::with_notes(&value.name, value.notes)
    }
}

/// A view as selected by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Implicit superset of the user's notes. Never persisted or mutated.
    AllNotes,
    Named(NamedView),
}

impl View {
    pub fn name(&self) -> &str {
        match self {
            Self::AllNotes => ALL_NOTES_VIEW_NAME,
            Self::Named(view) => view.name(),
        }
    }

    pub fn is_all_notes(&self) -> bool {
        matches!(self, Self::AllNotes)
    }

    /// Returns whether the view shows `note_id`. Always true for `AllNotes`.
    pub fn contains(&self, note_id: &NoteId) -> bool {
        match self {
            Self::AllNotes => true,
            Self::Named(view) => view.contains(note_id),
        }
    }
}

/// Ordered set of views owned by one user.
///
/// Position 0 is always `View::AllNotes`; only named views are stored and
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RawView>", into = "Vec<NamedView>")]
pub struct ViewCollection {
    pub(crate) named: Vec<NamedView>,
}

impl ViewCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from named views, rejecting duplicate names.
    pub fn from_named(views: Vec<NamedView>) -> Result<Self, ViewError> {
        let mut seen = HashSet::new();
        for view in &views {
            if !seen.insert(name_key(view.name())) {
                return Err(ViewError::DuplicateName(view.name().to_string()));
            }
        }
        Ok(Self { named: views })
    }

    /// Number of views including the reserved one.
    pub fn len(&self) -> usize {
        self.named.len() + 1
    }

    /// Always false: the reserved view is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the view at `index`, where index 0 is `View::AllNotes`.
    pub fn get(&self, index: usize) -> Option<View> {
        match index {
            0 => Some(View::AllNotes),
            _ => self.named.get(index - 1).cloned().map(View::Named),
        }
    }

    /// Iterates all views, reserved view first.
    pub fn iter(&self) -> impl Iterator<Item = View> + '_ {
        std::iter::once(View::AllNotes).chain(self.named.iter().cloned().map(View::Named))
    }

    /// Views offered as explicit "add to view" targets.
    ///
    /// The reserved view is excluded: membership in it is implicit.
    pub fn add_targets(&self) -> &[NamedView] {
        self.named.as_slice()
    }

    /// Finds a named view, ignoring case and surrounding/repeated whitespace
    /// the same way name uniqueness does.
    pub fn find(&self, name: &str) -> Option<&NamedView> {
        let key = name_key(name);
        self.named.iter().find(|view| name_key(view.name()) == key)
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut NamedView> {
        let key = name_key(name);
        self.named
            .iter_mut()
            .find(|view| name_key(view.name()) == key)
    }

    /// Resolves a selection by name; the reserved name selects `AllNotes`.
    pub fn select(&self, name: &str) -> Option<View> {
        if is_reserved_name(name) {
            return Some(View::AllNotes);
        }
        self.find(name).cloned().map(View::Named)
    }
}

impl TryFrom<Vec<RawView>> for ViewCollection {
    type Error = ViewError;

    fn try_from(value: Vec<RawView>) -> Result<Self, Self::Error> {
        // Stores may persist the reserved view alongside user views.
        let named = value
            .into_iter()
            .filter(|raw| !is_reserved_name(&raw.name))
            .map(NamedView::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_named(named)
    }
}

impl From<ViewCollection> for Vec<NamedView> {
    fn from(value: ViewCollection) -> Self {
        value.named
    }
}
