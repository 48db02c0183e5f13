mod helpers;

use std::time::Duration;

use crossterm::event::KeyCode;

use adventide::app::Mode;
use adventide::handlers::Effect;
use adventide::sequencer::{DETAIL_MOUNT, FLASH_RISE, SEQUENCE_END};

use helpers::TestContext;

#[test]
fn open_a_day_toggle_a_todo_and_come_back() {
    let mut ctx = TestContext::new();

    // Walk the cursor to day 8 and open it.
    for _ in 0..7 {
        ctx.press(KeyCode::Char('l'));
    }
    assert_eq!(ctx.app.cursor_day(), 8);
    ctx.press(KeyCode::Enter);
    assert!(ctx.app.sequencer.locked());

    ctx.advance(SEQUENCE_END);
    assert_eq!(ctx.app.mode, Mode::Detail(8));

    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Char('x'));
    let toggled_id = ctx.app.detail_todos[1].id;
    assert!(ctx.app.detail_todos[1].done);

    ctx.press(KeyCode::Esc);
    assert_eq!(ctx.app.mode, Mode::Grid);

    // Reopening shows the persisted flag.
    ctx.open_day(8);
    assert!(
        ctx.app
            .detail_todos
            .iter()
            .find(|t| t.id == toggled_id)
            .unwrap()
            .done
    );
}

#[test]
fn selection_during_a_transition_is_swallowed() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);

    ctx.advance(FLASH_RISE);
    ctx.press(KeyCode::Char('l'));
    ctx.press(KeyCode::Enter);

    ctx.advance(DETAIL_MOUNT - FLASH_RISE);
    assert_eq!(ctx.app.mode, Mode::Detail(1), "first selection wins");

    ctx.advance(SEQUENCE_END - DETAIL_MOUNT);
    assert!(!ctx.app.sequencer.locked());
}

#[test]
fn detail_mounts_before_the_guard_releases() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Enter);

    ctx.advance(DETAIL_MOUNT);
    assert_eq!(ctx.app.mode, Mode::Detail(1));
    assert!(ctx.app.sequencer.locked(), "fade still running");

    ctx.advance(SEQUENCE_END - DETAIL_MOUNT);
    assert!(!ctx.app.sequencer.locked());
}

#[test]
fn admin_edits_show_up_on_the_calendar_after_save() {
    let mut ctx = TestContext::with_admin();
    ctx.press(KeyCode::Char('A'));
    assert_eq!(ctx.app.mode, Mode::Admin);

    // Title is the first field.
    ctx.press(KeyCode::Enter);
    ctx.type_str("Refit day");
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('s'));
    ctx.press(KeyCode::Esc);

    ctx.open_day(1);
    assert_eq!(ctx.app.day_view(1).title(), "Refit day");
}

#[test]
fn unsaved_admin_draft_is_discarded_on_day_switch() {
    let mut ctx = TestContext::with_admin();
    ctx.press(KeyCode::Char('A'));

    ctx.press(KeyCode::Enter);
    ctx.type_str("Never saved");
    ctx.press(KeyCode::Enter);

    ctx.press(KeyCode::Char(']'));
    ctx.press(KeyCode::Char('['));
    assert_eq!(ctx.app.admin.as_ref().unwrap().draft().title, None);

    ctx.press(KeyCode::Esc);
    assert_eq!(ctx.app.day_view(1).title(), "Day 1", "nothing persisted");
}

#[test]
fn export_hands_the_draft_to_the_caller_without_saving() {
    let mut ctx = TestContext::with_admin();
    ctx.press(KeyCode::Char('A'));
    ctx.press(KeyCode::Enter);
    ctx.type_str("Snapshot only");
    ctx.press(KeyCode::Enter);

    let Effect::ExportDraft(json) = ctx.press(KeyCode::Char('e')) else {
        panic!("expected an export effect");
    };
    assert!(json.contains("Snapshot only"));

    ctx.press(KeyCode::Esc);
    assert_eq!(ctx.app.day_view(1).title(), "Day 1");
}

#[test]
fn hidden_day_cannot_be_opened() {
    let mut ctx = TestContext::with_admin();

    // Mark day 1 hidden through the admin surface.
    ctx.app.open_admin();
    ctx.app.admin.as_mut().unwrap().set_hidden(true);
    ctx.app.admin_save();
    ctx.app.close_admin();

    ctx.press(KeyCode::Enter);
    assert!(!ctx.app.sequencer.locked(), "selection was refused");
    ctx.advance(Duration::from_secs(3));
    assert_eq!(ctx.app.mode, Mode::Grid);
}

#[test]
fn header_tap_shows_a_message_that_expires() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('t'));
    assert!(ctx.app.header_message().is_some());

    ctx.advance(Duration::from_secs(60));
    assert!(ctx.app.header_message().is_none());
}
