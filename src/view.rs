//! View models handed to the rendering layer. Everything here is derived;
//! the renderer never reaches into the stores directly.

use crate::content::{Clip, ContentStore, DayContent};
use crate::progress::ProgressStore;
use crate::theme::{self, Theme};

/// Effective single-day record: compiled defaults layered with the admin
/// override, todos merged with per-user completion, theme resolved.
#[derive(Debug, Clone)]
pub struct DayView {
    pub day: u8,
    pub content: DayContent,
    pub theme: Theme,
}

impl DayView {
    /// Display title, falling back to the computed "Day N" form.
    #[must_use]
    pub fn title(&self) -> String {
        match self.content.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Day {}", self.day),
        }
    }

    /// Clips shown in the detail view. A non-empty `clips` list fully
    /// supersedes the legacy single link; the legacy link only surfaces —
    /// wrapped as a one-entry list — when the new list is empty, and a
    /// value of `"#"` or `""` counts as absent.
    #[must_use]
    pub fn active_clips(&self) -> Vec<Clip> {
        if !self.content.clips.is_empty() {
            return self.content.clips.clone();
        }
        match self.content.clip_link.as_deref() {
            Some(link) if !link.is_empty() && link != "#" => vec![Clip {
                id: "legacy-clip".to_string(),
                url: link.to_string(),
                label: "Clip of the day".to_string(),
            }],
            _ => Vec::new(),
        }
    }
}

/// Composes the content store and the completion store into one effective
/// day view.
#[must_use]
pub fn resolve_day(content: &ContentStore, progress: &ProgressStore, day: u8) -> DayView {
    let mut record = content.get(day);
    record.todos = progress.load(day, &record.todos);
    let theme = theme::resolve(day, record.color.as_deref());
    DayView {
        day,
        content: record,
        theme,
    }
}

/// What one grid cell needs to paint itself.
#[derive(Debug, Clone)]
pub struct CellView {
    pub day: u8,
    pub theme: Theme,
    /// Renders already-open regardless of interaction (`force_open`).
    pub is_revealed: bool,
    /// Spoiler flag: permanently obscured and not openable by click.
    pub hidden: bool,
    /// Carries the selection highlight while a transition targets it.
    pub is_clicked: bool,
    /// Global input lock while a transition is in flight.
    pub is_locked: bool,
}

impl CellView {
    #[must_use]
    pub fn new(day: u8, content: &DayContent, clicked_day: Option<u8>, locked: bool) -> Self {
        Self {
            day,
            theme: theme::resolve(day, content.color.as_deref()),
            is_revealed: content.force_open,
            hidden: content.hidden,
            is_clicked: clicked_day == Some(day),
            is_locked: locked,
        }
    }
}
