use chrono::{DateTime, Utc};

use crate::vm::markdown_vm::preview;
use crate::vm::time_fmt::format_date;

const NOTE_PREVIEW_CHARS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteOrigin {
    /// Mirrors an entry of the saved-content memory.
    Saved,
    /// Written on the notebook screen; lives only as long as the screen.
    Local,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteVm {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub created: String,
    pub origin: NoteOrigin,
}

/// Notes shown on the notebook screen.
///
/// Built from saved content on entry. Creating or deleting notes never writes back to the
/// session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotebookState {
    notes: Vec<NoteVm>,
    next_id: u64,
    selected: Option<u64>,
}

impl NotebookState {
    #[must_use]
    pub fn from_saved(saved: &[String], now: DateTime<Utc>) -> Self {
        let notes: Vec<NoteVm> = saved
            .iter()
            .zip(1_u64..)
            .map(|(content, id)| NoteVm {
                id,
                title: format!("Note {id}"),
                content: content.clone(),
                preview: preview(content, NOTE_PREVIEW_CHARS),
                created: format_date(now),
                origin: NoteOrigin::Saved,
            })
            .collect();
        let next_id = notes.last().map_or(1, |note| note.id + 1);
        Self {
            notes,
            next_id,
            selected: None,
        }
    }

    #[must_use]
    pub fn notes(&self) -> &[NoteVm] {
        &self.notes
    }

    #[must_use]
    pub fn selected(&self) -> Option<&NoteVm> {
        let id = self.selected?;
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn select(&mut self, id: u64) -> bool {
        let found = self.notes.iter().any(|note| note.id == id);
        if found {
            self.selected = Some(id);
        }
        found
    }

    /// Adds a note at the top and selects it. Blank title or content is refused.
    pub fn create(&mut self, title: &str, content: &str, now: DateTime<Utc>) -> Option<u64> {
        let (title, content) = (title.trim(), content.trim());
        if title.is_empty() || content.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.notes.insert(
            0,
            NoteVm {
                id,
                title: title.to_string(),
                content: content.to_string(),
                preview: preview(content, NOTE_PREVIEW_CHARS),
                created: format_date(now),
                origin: NoteOrigin::Local,
            },
        );
        self.selected = Some(id);
        Some(id)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.notes.len() != before
    }
}
