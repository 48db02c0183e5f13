use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::admin::AdminSession;
use crate::app::{AdminEditTarget, AdminField, App, Mode};
use crate::content::{ImageSource, FIRST_DAY, LAST_DAY};

/// Side effects the event loop has to carry out, because they leave the
/// app's own state (clipboard access lives in the binary).
pub enum Effect {
    None,
    ExportDraft(String),
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> Effect {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Effect::None;
    }

    match app.mode {
        Mode::Grid => grid_key(app, key, now),
        Mode::Detail(_) => detail_key(app, key),
        Mode::Admin => return admin_key(app, key),
    }
    Effect::None
}

fn grid_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let day = app.cursor_day();
            app.select_day(day, now);
        }
        KeyCode::Char('t') => app.tap_header(now),
        // No-op unless the binary granted the admin capability.
        KeyCode::Char('A') => app.open_admin(),
        _ => {}
    }
}

fn detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
        KeyCode::Up | KeyCode::Char('k') => app.detail_move(-1),
        KeyCode::Down | KeyCode::Char('j') => app.detail_move(1),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected_todo(),
        _ => {}
    }
}

fn admin_key(app: &mut App, key: KeyEvent) -> Effect {
    if app.admin_ui.edit.is_some() {
        admin_edit_key(app, key);
        return Effect::None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_admin(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.admin_ui.field = app.admin_ui.field.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.admin_ui.field = (app.admin_ui.field + 1).min(AdminField::ALL.len() - 1);
        }
        KeyCode::Char('[') => admin_switch_day(app, -1),
        KeyCode::Char(']') => admin_switch_day(app, 1),
        KeyCode::Char('s') => app.admin_save(),
        KeyCode::Char('e') => {
            if let Some(json) = app.admin_export() {
                return Effect::ExportDraft(json);
            }
        }
        KeyCode::Char('c') if app.admin_ui.current_field() == AdminField::Color => {
            cycle_color(app);
        }
        KeyCode::Char('x') if app.admin_ui.current_field() == AdminField::ImageUrl => {
            if let Some(session) = app.admin.as_mut() {
                session.clear_image();
            }
        }
        KeyCode::Left if app.admin_ui.current_field() == AdminField::Todos => {
            app.admin_ui.todo_selected = app.admin_ui.todo_selected.saturating_sub(1);
        }
        KeyCode::Right if app.admin_ui.current_field() == AdminField::Todos => {
            let len = app.admin.as_ref().map_or(0, |s| s.draft().todos.len());
            if len > 0 {
                app.admin_ui.todo_selected = (app.admin_ui.todo_selected + 1).min(len - 1);
            }
        }
        KeyCode::Char('a') if app.admin_ui.current_field() == AdminField::Todos => {
            if let Some(session) = app.admin.as_mut() {
                session.add_todo();
                app.admin_ui.todo_selected = session.draft().todos.len() - 1;
            }
        }
        KeyCode::Char('d') if app.admin_ui.current_field() == AdminField::Todos => {
            if let Some(session) = app.admin.as_mut() {
                if let Some(todo) = session.draft().todos.get(app.admin_ui.todo_selected) {
                    let id = todo.id;
                    session.remove_todo(id);
                }
                let len = session.draft().todos.len();
                app.admin_ui.todo_selected = app.admin_ui.todo_selected.min(len.saturating_sub(1));
            }
        }
        KeyCode::Enter => admin_begin_edit(app),
        _ => {}
    }
    Effect::None
}

fn admin_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.admin_ui.edit = None;
        }
        KeyCode::Enter => admin_commit_edit(app),
        KeyCode::Backspace => {
            if let Some((_, buffer)) = app.admin_ui.edit.as_mut() {
                buffer.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some((_, buffer)) = app.admin_ui.edit.as_mut() {
                buffer.push(c);
            }
        }
        _ => {}
    }
}

fn admin_switch_day(app: &mut App, delta: i8) {
    let Some(session) = app.admin.as_mut() else {
        return;
    };
    let day = session
        .day()
        .saturating_add_signed(delta)
        .clamp(FIRST_DAY, LAST_DAY);
    session.select_day(day, &app.content);
    app.admin_ui.todo_selected = 0;
    app.admin_ui.edit = None;
}

const COLOR_CYCLE: [Option<&str>; 8] = [
    None,
    Some("amber"),
    Some("red"),
    Some("green"),
    Some("blue"),
    Some("cyan"),
    Some("purple"),
    Some("pink"),
];

/// Steps through the preset swatches. A literal hex value (set through
/// the edit buffer) is not in the cycle and steps back to the default.
fn cycle_color(app: &mut App) {
    let Some(session) = app.admin.as_mut() else {
        return;
    };
    let current = session.draft().color.as_deref();
    let next = match COLOR_CYCLE.iter().position(|c| *c == current) {
        Some(i) => COLOR_CYCLE[(i + 1) % COLOR_CYCLE.len()],
        None => COLOR_CYCLE[0],
    };
    session.set_color(next.map(str::to_string));
}

fn admin_begin_edit(app: &mut App) {
    let Some(session) = app.admin.as_ref() else {
        return;
    };
    let field = app.admin_ui.current_field();
    let draft = session.draft();

    let target = match field {
        AdminField::ForceOpen => {
            let value = !draft.force_open;
            if let Some(session) = app.admin.as_mut() {
                session.set_force_open(value);
            }
            return;
        }
        AdminField::Hidden => {
            let value = !draft.hidden;
            if let Some(session) = app.admin.as_mut() {
                session.set_hidden(value);
            }
            return;
        }
        AdminField::Todos => {
            let Some(todo) = draft.todos.get(app.admin_ui.todo_selected) else {
                return;
            };
            (AdminEditTarget::Todo(todo.id), todo.text.clone())
        }
        _ => (AdminEditTarget::Field(field), field_value(session, field)),
    };

    app.admin_ui.edit = Some(target);
}

fn admin_commit_edit(app: &mut App) {
    let Some((target, value)) = app.admin_ui.edit.take() else {
        return;
    };
    let Some(session) = app.admin.as_mut() else {
        return;
    };

    match target {
        AdminEditTarget::Todo(id) => session.edit_todo_text(id, value),
        AdminEditTarget::Field(field) => match field {
            AdminField::Title => session.set_title(value),
            AdminField::Description => session.set_description(value),
            AdminField::Color => {
                session.set_color((!value.is_empty()).then_some(value));
            }
            AdminField::ImageUrl => session.set_image_url(value),
            AdminField::StreamLink => session.set_stream_link(value),
            AdminField::ClipLink => session.set_clip_link(value),
            AdminField::ForceOpen | AdminField::Hidden | AdminField::Todos => {}
        },
    }
}

fn field_value(session: &AdminSession, field: AdminField) -> String {
    let draft = session.draft();
    match field {
        AdminField::Title => draft.title.clone().unwrap_or_default(),
        AdminField::Description => draft.description.clone(),
        AdminField::Color => draft.color.clone().unwrap_or_default(),
        AdminField::ImageUrl => match &draft.image {
            ImageSource::Url(url) => url.clone(),
            _ => String::new(),
        },
        AdminField::StreamLink => draft.stream_link.clone().unwrap_or_default(),
        AdminField::ClipLink => draft.clip_link.clone().unwrap_or_default(),
        AdminField::ForceOpen | AdminField::Hidden | AdminField::Todos => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::AdminAccess;
    use crate::config::Config;
    use crate::content::ContentStore;
    use crate::kv::MemStore;
    use crate::progress::ProgressStore;

    fn admin_app() -> App {
        let mut app = App::new(
            Config::default(),
            ContentStore::new(Box::new(MemStore::new())),
            ProgressStore::new(Box::new(MemStore::new())),
            Some(AdminAccess::grant()),
        );
        app.open_admin();
        app
    }

    fn press(app: &mut App, code: KeyCode) -> Effect {
        handle_key(
            app,
            KeyEvent::new(code, KeyModifiers::NONE),
            Instant::now(),
        )
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn editing_the_title_flows_into_the_draft() {
        let mut app = admin_app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Door one");
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.admin.as_ref().unwrap().draft().title.as_deref(),
            Some("Door one")
        );
    }

    #[test]
    fn color_cycle_steps_through_presets() {
        let mut app = admin_app();
        // Move to the color field.
        while app.admin_ui.current_field() != AdminField::Color {
            press(&mut app, KeyCode::Down);
        }
        // Day 1 defaults to the amber preset; one step lands on red.
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(
            app.admin.as_ref().unwrap().draft().color.as_deref(),
            Some("red")
        );
    }

    #[test]
    fn day_switch_clamps_and_discards() {
        let mut app = admin_app();
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.admin.as_ref().unwrap().day(), 1);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.admin.as_ref().unwrap().day(), 2);
    }

    #[test]
    fn escape_cancels_an_edit() {
        let mut app = admin_app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "discarded");
        press(&mut app, KeyCode::Esc);
        assert!(app.admin_ui.edit.is_none());
        assert_eq!(app.admin.as_ref().unwrap().draft().title, None);
    }
}
