use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};

use crate::app::{App, Mode};

pub fn render_footer(app: &App) -> Line<'static> {
    if let Some(status) = &app.status_message {
        return Line::from(vec![
            Span::styled(" * ", Style::default().fg(Color::Yellow)),
            Span::raw(status.clone()),
        ]);
    }

    match app.mode {
        Mode::Grid => build_footer_line(
            " CALENDAR ",
            Color::Cyan,
            &[("hjkl", "Move"), ("Enter", "Open"), ("t", "Tap"), ("q", "Quit")],
        ),
        Mode::Detail(_) => build_footer_line(
            " DAY ",
            Color::Green,
            &[("j/k", "Select"), ("x", "Toggle"), ("Esc", "Back"), ("q", "Quit")],
        ),
        Mode::Admin if app.admin_ui.edit.is_some() => build_footer_line(
            " EDIT ",
            Color::Yellow,
            &[("Enter", "Apply"), ("Esc", "Cancel")],
        ),
        Mode::Admin => build_footer_line(
            " ADMIN ",
            Color::Yellow,
            &[
                ("j/k", "Field"),
                ("[/]", "Day"),
                ("Enter", "Edit"),
                ("s", "Save"),
                ("e", "Export"),
                ("Esc", "Close"),
            ],
        ),
    }
}

fn build_footer_line(
    mode_name: &str,
    color: Color,
    hints: &[(&str, &str)],
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        mode_name.to_string(),
        Style::default().fg(Color::Black).bg(color),
    )];

    for (key, action) in hints {
        spans.push(Span::styled(
            format!("  {key}"),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(format!(" {action} "), Style::default().dim()));
    }

    Line::from(spans)
}
