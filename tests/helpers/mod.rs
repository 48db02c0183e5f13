#![allow(dead_code)]

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use adventide::admin::AdminAccess;
use adventide::app::App;
use adventide::config::Config;
use adventide::content::ContentStore;
use adventide::handlers::{self, Effect};
use adventide::kv::MemStore;
use adventide::progress::ProgressStore;
use adventide::sequencer::SEQUENCE_END;

pub struct TestContext {
    pub app: App,
    pub now: Instant,
}

impl TestContext {
    pub fn new() -> Self {
        Self::build(false)
    }

    pub fn with_admin() -> Self {
        Self::build(true)
    }

    fn build(admin: bool) -> Self {
        let app = App::new(
            Config::default(),
            ContentStore::new(Box::new(MemStore::new())),
            ProgressStore::new(Box::new(MemStore::new())),
            admin.then(AdminAccess::grant),
        );
        Self {
            app,
            now: Instant::now(),
        }
    }

    /// Advances the synthetic clock and runs one tick, like one pass of
    /// the event loop.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        self.app.tick(self.now);
    }

    pub fn press(&mut self, code: KeyCode) -> Effect {
        handlers::handle_key(&mut self.app, KeyEvent::new(code, KeyModifiers::NONE), self.now)
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Selects a day and rides the transition out to the detail view.
    pub fn open_day(&mut self, day: u8) {
        self.app.select_day(day, self.now);
        self.advance(SEQUENCE_END);
    }
}
