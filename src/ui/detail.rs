use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::content::ImageSource;

use super::{color, wrap_text};

pub fn build_detail(app: &App, day: u8, width: usize) -> Vec<Line<'static>> {
    let view = app.day_view(day);
    let theme = view.theme;

    let mut lines = vec![
        Line::raw(""),
        Line::styled(
            format!(" {} ", view.title()),
            Style::default().fg(Color::Black).bg(color(theme.bright_from)),
        ),
        Line::raw(""),
    ];
    for row in wrap_text(&view.content.description, width.max(1)) {
        lines.push(Line::styled(
            format!(" {row}"),
            Style::default().fg(color(theme.text)),
        ));
    }
    lines.push(Line::raw(""));

    match &view.content.image {
        ImageSource::Url(url) => {
            lines.push(Line::styled(
                format!(" Image: {url}"),
                Style::default().fg(Color::Gray),
            ));
        }
        ImageSource::Inline(_) => {
            lines.push(Line::styled(
                " Image: inline upload",
                Style::default().fg(Color::Gray),
            ));
        }
        ImageSource::DefaultArt => {}
    }

    if let Some(link) = &view.content.stream_link {
        lines.push(Line::styled(
            format!(" Stream: {link}"),
            Style::default().fg(color(theme.ray)),
        ));
    }

    for clip in view.active_clips() {
        lines.push(Line::styled(
            format!(" {}: {}", clip.label, clip.url),
            Style::default().fg(color(theme.ray)),
        ));
    }

    if !app.detail_todos.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            " Checklist",
            Style::default().fg(color(theme.text)).bold(),
        ));
        for (i, todo) in app.detail_todos.iter().enumerate() {
            let marker = if todo.done { "[x]" } else { "[ ]" };
            let mut style = if todo.done {
                Style::default().fg(Color::Gray).crossed_out()
            } else {
                Style::default().fg(color(theme.text))
            };
            if i == app.detail_selected {
                style = style.reversed();
            }
            lines.push(Line::from(Span::styled(
                format!("  {marker} {}", todo.text),
                style,
            )));
        }
    }

    lines
}
