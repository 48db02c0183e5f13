use std::time::{Duration, Instant};

use rand::Rng;

use crate::admin::{AdminAccess, AdminSession};
use crate::config::Config;
use crate::content::{ContentStore, TodoItem};
use crate::progress::ProgressStore;
use crate::sequencer::RevealSequencer;
use crate::theme;
use crate::view::{self, CellView, DayView};

pub const GRID_COLS: usize = 6;
pub const DAY_COUNT: usize = 24;

/// Header messages shown when the title is tapped. Pure easter egg.
const HEADER_MESSAGES: &[&str] = &[
    "Thanks for flying with us!",
    "Houston, everything is fine up here.",
    "All systems nominal.",
    "Don't forget to check your fuel levels!",
    "Keeping the channel open. Stay tuned!",
    "Cosmic vibes at full power.",
    "Shall we go to Mars together?",
    "Watch the void. It watches back.",
    "Twenty-four doors, zero gravity.",
    "The crew says hi.",
    "Signal strength: excellent.",
    "Nobody asked for this, and yet here it is.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Grid,
    Detail(u8),
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminField {
    Title,
    Description,
    Color,
    ImageUrl,
    StreamLink,
    ClipLink,
    ForceOpen,
    Hidden,
    Todos,
}

impl AdminField {
    pub const ALL: [AdminField; 9] = [
        Self::Title,
        Self::Description,
        Self::Color,
        Self::ImageUrl,
        Self::StreamLink,
        Self::ClipLink,
        Self::ForceOpen,
        Self::Hidden,
        Self::Todos,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Color => "Glow color",
            Self::ImageUrl => "Image URL",
            Self::StreamLink => "Stream link",
            Self::ClipLink => "Clip link (legacy)",
            Self::ForceOpen => "Force open",
            Self::Hidden => "Spoiler",
            Self::Todos => "Todos",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEditTarget {
    Field(AdminField),
    Todo(u32),
}

/// Cursor and edit-buffer state for the admin form. Pure UI bookkeeping;
/// the draft itself lives in the session.
#[derive(Default)]
pub struct AdminUiState {
    pub field: usize,
    pub todo_selected: usize,
    pub edit: Option<(AdminEditTarget, String)>,
}

impl AdminUiState {
    #[must_use]
    pub fn current_field(&self) -> AdminField {
        AdminField::ALL[self.field]
    }
}

struct HeaderMessage {
    text: &'static str,
    expires_at: Instant,
}

/// Top-level state: stores, sequencer, optional admin session, and the
/// current mode. All event handling is synchronous; the only timers are
/// the sequencer deadlines and the header-message expiry, both advanced
/// from `tick`.
pub struct App {
    pub config: Config,
    pub content: ContentStore,
    pub progress: ProgressStore,
    pub sequencer: RevealSequencer,
    pub admin: Option<AdminSession>,
    pub admin_ui: AdminUiState,
    admin_access: Option<AdminAccess>,
    pub mode: Mode,
    pub grid_cursor: usize,
    /// Todos shown in the detail view. In-memory state is authoritative:
    /// a failed persistence write never reverts a visible toggle.
    pub detail_todos: Vec<TodoItem>,
    pub detail_selected: usize,
    header_message: Option<HeaderMessage>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        config: Config,
        content: ContentStore,
        progress: ProgressStore,
        admin_access: Option<AdminAccess>,
    ) -> Self {
        Self {
            config,
            content,
            progress,
            sequencer: RevealSequencer::new(),
            admin: None,
            admin_ui: AdminUiState::default(),
            admin_access,
            mode: Mode::Grid,
            grid_cursor: 0,
            detail_todos: Vec::new(),
            detail_selected: 0,
            header_message: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Advances timers. Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if let Some(day) = self.sequencer.tick(now) {
            self.enter_detail(day);
        }
        if let Some(msg) = &self.header_message
            && now >= msg.expires_at
        {
            self.header_message = None;
        }
    }

    /// Handles a day selection from the grid. The sequencer guard decides
    /// acceptance in the same synchronous step; a selection during a
    /// running transition is a no-op, whatever the day.
    pub fn select_day(&mut self, day: u8, now: Instant) {
        if self.mode != Mode::Grid {
            return;
        }
        let content = self.content.get(day);
        if content.hidden {
            return;
        }
        let flash = theme::resolve(day, content.color.as_deref()).flash;
        self.sequencer.begin(day, flash, now);
    }

    fn enter_detail(&mut self, day: u8) {
        let view = self.day_view(day);
        self.detail_todos = view.content.todos;
        self.detail_selected = 0;
        self.mode = Mode::Detail(day);
    }

    /// Returns to the grid instantly; only meaningful from the detail
    /// view. A still-running fade keeps ticking to release the guard.
    pub fn go_back(&mut self) {
        if matches!(self.mode, Mode::Detail(_)) {
            self.mode = Mode::Grid;
            self.detail_todos.clear();
        }
    }

    /// Flips one todo and persists best-effort.
    pub fn toggle_todo(&mut self, day: u8, id: u32) {
        if self.mode != Mode::Detail(day) {
            return;
        }
        if let Some(todo) = self.detail_todos.iter_mut().find(|t| t.id == id) {
            todo.done = !todo.done;
            self.progress.save(day, &self.detail_todos);
        }
    }

    pub fn toggle_selected_todo(&mut self) {
        let Mode::Detail(day) = self.mode else {
            return;
        };
        if let Some(id) = self.detail_todos.get(self.detail_selected).map(|t| t.id) {
            self.toggle_todo(day, id);
        }
    }

    /// Shows a random header message. Any previous expiry deadline is
    /// replaced so a stale dismissal never hides a newer message.
    pub fn tap_header(&mut self, now: Instant) {
        let text = HEADER_MESSAGES[rand::thread_rng().gen_range(0..HEADER_MESSAGES.len())];
        let words = text.split_whitespace().count() as u64;
        let duration = Duration::from_millis((words * 600).max(3000));
        self.header_message = Some(HeaderMessage {
            text,
            expires_at: now + duration,
        });
    }

    #[must_use]
    pub fn header_message(&self) -> Option<&str> {
        self.header_message.as_ref().map(|m| m.text)
    }

    /// Enters the admin surface. Gated by the capability handed to the
    /// constructor; without it this is a no-op with a status hint.
    pub fn open_admin(&mut self) {
        if self.admin_access.is_none() {
            self.status_message = Some("Admin access is not enabled".to_string());
            return;
        }
        if self.sequencer.locked() {
            return;
        }
        self.admin = Some(AdminSession::open(1, &self.content));
        self.admin_ui = AdminUiState::default();
        self.mode = Mode::Admin;
    }

    /// Leaves the admin surface, discarding any unsaved draft.
    pub fn close_admin(&mut self) {
        self.admin = None;
        self.admin_ui = AdminUiState::default();
        self.mode = Mode::Grid;
    }

    pub fn admin_save(&mut self) {
        let Some(session) = self.admin.as_mut() else {
            return;
        };
        match session.save(&mut self.content) {
            Ok(()) => {
                self.status_message = Some(format!("Saved day {}", session.day()));
            }
            Err(e) => {
                self.status_message = Some(format!("Save failed: {e}"));
            }
        }
    }

    /// Snapshot of the admin draft for external capture. The caller owns
    /// where it goes (clipboard, stdout); persisted state is untouched.
    pub fn admin_export(&mut self) -> Option<String> {
        let session = self.admin.as_ref()?;
        match session.export_snapshot() {
            Ok(json) => Some(json),
            Err(e) => {
                self.status_message = Some(format!("Export failed: {e}"));
                None
            }
        }
    }

    // Rendering boundary.

    #[must_use]
    pub fn cell_view(&self, day: u8) -> CellView {
        CellView::new(
            day,
            &self.content.get(day),
            self.sequencer.clicked_day(),
            self.sequencer.locked(),
        )
    }

    #[must_use]
    pub fn day_view(&self, day: u8) -> DayView {
        view::resolve_day(&self.content, &self.progress, day)
    }

    #[must_use]
    pub fn cursor_day(&self) -> u8 {
        self.grid_cursor as u8 + 1
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let cols = GRID_COLS as isize;
        let count = DAY_COUNT as isize;
        let mut pos = self.grid_cursor as isize + dx + dy * cols;
        pos = pos.clamp(0, count - 1);
        self.grid_cursor = pos as usize;
    }

    pub fn detail_move(&mut self, delta: isize) {
        if self.detail_todos.is_empty() {
            return;
        }
        let last = self.detail_todos.len() as isize - 1;
        let pos = (self.detail_selected as isize + delta).clamp(0, last);
        self.detail_selected = pos as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemStore;
    use crate::sequencer::SEQUENCE_END;

    fn app(admin: bool) -> App {
        App::new(
            Config::default(),
            ContentStore::new(Box::new(MemStore::new())),
            ProgressStore::new(Box::new(MemStore::new())),
            admin.then(AdminAccess::grant),
        )
    }

    #[test]
    fn double_selection_completes_one_transition() {
        let mut app = app(false);
        let t0 = Instant::now();

        app.select_day(3, t0);
        app.select_day(5, t0 + Duration::from_millis(100));

        app.tick(t0 + SEQUENCE_END);
        assert_eq!(app.mode, Mode::Detail(3));
        assert!(!app.sequencer.locked());
    }

    #[test]
    fn toggle_is_visible_and_persisted() {
        let mut app = app(false);
        let t0 = Instant::now();
        app.select_day(2, t0);
        app.tick(t0 + SEQUENCE_END);

        let id = app.detail_todos[0].id;
        app.toggle_todo(2, id);
        assert!(app.detail_todos[0].done);

        // A fresh resolve sees the persisted flag.
        assert!(app.day_view(2).content.todos[0].done);
    }

    #[test]
    fn go_back_returns_to_an_interactive_grid() {
        let mut app = app(false);
        let t0 = Instant::now();
        app.select_day(4, t0);
        app.tick(t0 + SEQUENCE_END);
        app.go_back();
        assert_eq!(app.mode, Mode::Grid);

        app.select_day(6, t0 + SEQUENCE_END + Duration::from_millis(1));
        assert!(app.sequencer.locked(), "grid is selectable again");
    }

    #[test]
    fn header_message_deadline_is_replaced() {
        let mut app = app(false);
        let t0 = Instant::now();
        app.tap_header(t0);
        // Re-trigger just before the first deadline; the old one must not
        // dismiss the new message.
        app.tap_header(t0 + Duration::from_millis(2999));
        app.tick(t0 + Duration::from_millis(3001));
        assert!(app.header_message().is_some());

        app.tick(t0 + Duration::from_secs(60));
        assert!(app.header_message().is_none());
    }

    #[test]
    fn admin_requires_the_capability() {
        let mut app = app(false);
        app.open_admin();
        assert_eq!(app.mode, Mode::Grid);
        assert!(app.admin.is_none());

        let mut gated = app_with_admin();
        gated.open_admin();
        assert_eq!(gated.mode, Mode::Admin);
    }

    fn app_with_admin() -> App {
        app(true)
    }

    #[test]
    fn cursor_stays_inside_the_grid() {
        let mut app = app(false);
        app.move_cursor(-1, 0);
        assert_eq!(app.cursor_day(), 1);
        app.move_cursor(0, 10);
        assert_eq!(app.cursor_day(), 24);
    }
}
