pub mod admin;
pub mod app;
pub mod config;
pub mod content;
pub mod defaults;
pub mod handlers;
pub mod kv;
pub mod progress;
pub mod sequencer;
pub mod theme;
pub mod ui;
pub mod view;
