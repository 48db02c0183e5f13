use thiserror::Error;

use crate::content::{ContentStore, DayContent, ImageSource, TodoItem};
use crate::kv::StoreError;

/// Ceiling for inline (base64) image payloads. Oversized uploads are an
/// explicit user action with an expected outcome, so they fail loudly
/// instead of degrading.
pub const MAX_INLINE_IMAGE_BYTES: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("image is {size} bytes; the inline limit is {MAX_INLINE_IMAGE_BYTES}")]
    ImageTooLarge { size: usize },
}

/// Capability gating the admin surface. Only the composition root (main)
/// constructs one, from an out-of-band trigger — there is no in-UI path
/// to it. This is a developer-console gate, not a security boundary.
pub struct AdminAccess {
    _priv: (),
}

impl AdminAccess {
    #[must_use]
    pub fn grant() -> Self {
        Self { _priv: () }
    }
}

/// In-memory working copy of one day's content. Nothing touches the
/// content store until `save`; switching days discards the current draft.
pub struct AdminSession {
    day: u8,
    draft: DayContent,
    dirty: bool,
}

impl AdminSession {
    #[must_use]
    pub fn open(day: u8, store: &ContentStore) -> Self {
        Self {
            day,
            draft: store.get(day),
            dirty: false,
        }
    }

    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[must_use]
    pub fn draft(&self) -> &DayContent {
        &self.draft
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Switches the session to another day, discarding any unsaved edits
    /// to the current one. Re-selecting the current day keeps the draft.
    pub fn select_day(&mut self, day: u8, store: &ContentStore) {
        if day == self.day {
            return;
        }
        self.day = day;
        self.draft = store.get(day);
        self.dirty = false;
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = if title.is_empty() { None } else { Some(title) };
        self.dirty = true;
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
        self.dirty = true;
    }

    /// `None` means "use the default preset"; anything else is a preset
    /// name or a literal `#hex` string, validated only at resolve time.
    pub fn set_color(&mut self, color: Option<String>) {
        self.draft.color = color;
        self.dirty = true;
    }

    pub fn set_force_open(&mut self, force_open: bool) {
        self.draft.force_open = force_open;
        self.dirty = true;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.draft.hidden = hidden;
        self.dirty = true;
    }

    pub fn set_stream_link(&mut self, link: String) {
        self.draft.stream_link = if link.is_empty() { None } else { Some(link) };
        self.dirty = true;
    }

    pub fn set_clip_link(&mut self, link: String) {
        self.draft.clip_link = if link.is_empty() { None } else { Some(link) };
        self.dirty = true;
    }

    /// Setting a remote URL clears any inline payload: exactly one image
    /// source is authoritative at a time.
    pub fn set_image_url(&mut self, url: String) {
        self.draft.image = if url.is_empty() {
            ImageSource::DefaultArt
        } else {
            ImageSource::Url(url)
        };
        self.dirty = true;
    }

    /// Accepts an inline payload, clearing any URL. Rejects payloads over
    /// the size ceiling without touching the draft.
    pub fn set_inline_image(&mut self, data: String) -> Result<(), AdminError> {
        if data.len() > MAX_INLINE_IMAGE_BYTES {
            return Err(AdminError::ImageTooLarge { size: data.len() });
        }
        self.draft.image = ImageSource::Inline(data);
        self.dirty = true;
        Ok(())
    }

    /// Resets the visual back to the built-in art.
    pub fn clear_image(&mut self) {
        self.draft.image = ImageSource::DefaultArt;
        self.dirty = true;
    }

    pub fn edit_todo_text(&mut self, id: u32, text: String) {
        if let Some(todo) = self.draft.todos.iter_mut().find(|t| t.id == id) {
            todo.text = text;
            self.dirty = true;
        }
    }

    /// Appends a new todo with the next free id and returns that id.
    pub fn add_todo(&mut self) -> u32 {
        let id = self.draft.todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.draft.todos.push(TodoItem {
            id,
            text: "New task".to_string(),
            done: false,
        });
        self.dirty = true;
        id
    }

    pub fn remove_todo(&mut self, id: u32) {
        self.draft.todos.retain(|t| t.id != id);
        self.dirty = true;
    }

    /// Commits the working copy as the day's override, atomically
    /// replacing whatever was persisted before.
    pub fn save(&mut self, store: &mut ContentStore) -> Result<(), StoreError> {
        store.put(self.day, &self.draft)?;
        self.dirty = false;
        Ok(())
    }

    /// Serializes the draft for external capture (clipboard). Persisted
    /// state is untouched.
    pub fn export_snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.draft)
    }
}
