mod admin;
mod detail;
mod footer;
mod grid;

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::theme::Rgb;

pub use footer::render_footer;

pub(crate) fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Greedy word wrap by display width. Words wider than the line break
/// mid-word rather than overflow.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0;

    for word in text.split_inclusive(' ') {
        let word_width = word.width();
        if width + word_width <= max_width {
            current.push_str(word);
            width += word_width;
        } else if current.is_empty() {
            for ch in word.chars() {
                let ch_width = ch.to_string().width();
                if width + ch_width > max_width && !current.is_empty() {
                    lines.push(current);
                    current = String::new();
                    width = 0;
                }
                current.push(ch);
                width += ch_width;
            }
        } else {
            lines.push(current);
            current = word.to_string();
            width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

pub fn render_app(f: &mut Frame<'_>, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(header_lines(app));
    f.render_widget(header, chunks[0]);

    let body: Vec<Line<'static>> = match app.mode {
        Mode::Grid => grid::build_grid(app),
        Mode::Detail(day) => detail::build_detail(app, day, chunks[1].width.saturating_sub(2) as usize),
        Mode::Admin => admin::build_admin(app),
    };
    f.render_widget(Paragraph::new(body), chunks[1]);

    f.render_widget(Paragraph::new(render_footer(app)), chunks[2]);

    // Whiteout overlay during a reveal transition. Terminals have no
    // alpha, so the ramp is quantized to a solid fill past half opacity.
    if app.sequencer.overlay_opacity(now) > 0.5 {
        let fill = Paragraph::new("").style(Style::default().bg(color(app.sequencer.flash())));
        f.render_widget(fill, chunks[1]);
    }
}

fn header_lines(app: &App) -> Vec<Line<'static>> {
    let title = Line::styled(
        " ADVENTIDE ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    );
    let sub = match app.header_message() {
        Some(msg) => Line::styled(format!(" {msg}"), Style::default().fg(Color::Gray)),
        None => Line::raw(" Twenty-four days of mission control"),
    };
    vec![title, sub]
}
