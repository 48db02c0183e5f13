use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};

use crate::app::{AdminEditTarget, AdminField, App};
use crate::content::ImageSource;

pub fn build_admin(app: &App) -> Vec<Line<'static>> {
    let Some(session) = app.admin.as_ref() else {
        return vec![Line::raw(" No admin session")];
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!(" Editing day {:>2} ", session.day()),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            Span::styled(
                if session.is_dirty() { "  unsaved" } else { "" },
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::raw(""),
    ];

    for (i, field) in AdminField::ALL.iter().enumerate() {
        let selected = app.admin_ui.field == i;
        if *field == AdminField::Todos {
            lines.extend(todo_lines(app, selected));
        } else {
            lines.push(field_line(app, *field, selected));
        }
    }

    lines
}

fn field_line(app: &App, field: AdminField, selected: bool) -> Line<'static> {
    let value = match editing_value(app, AdminEditTarget::Field(field)) {
        Some(buffer) => format!("{buffer}\u{2588}"),
        None => displayed_value(app, field),
    };

    let mut label_style = Style::default().fg(Color::Gray);
    if selected {
        label_style = label_style.reversed();
    }

    Line::from(vec![
        Span::styled(format!(" {:<20}", field.label()), label_style),
        Span::raw(value),
    ])
}

fn todo_lines(app: &App, selected: bool) -> Vec<Line<'static>> {
    let Some(session) = app.admin.as_ref() else {
        return Vec::new();
    };

    let mut label_style = Style::default().fg(Color::Gray);
    if selected {
        label_style = label_style.reversed();
    }
    let mut lines = vec![Line::from(Span::styled(
        format!(" {:<20}", AdminField::Todos.label()),
        label_style,
    ))];

    for (i, todo) in session.draft().todos.iter().enumerate() {
        let text = match editing_value(app, AdminEditTarget::Todo(todo.id)) {
            Some(buffer) => format!("{buffer}\u{2588}"),
            None => todo.text.clone(),
        };
        let mut style = Style::default();
        if selected && i == app.admin_ui.todo_selected {
            style = style.bold().fg(Color::Yellow);
        }
        lines.push(Line::from(Span::styled(
            format!("   {:>2}. {text}", todo.id),
            style,
        )));
    }

    lines
}

/// The live edit buffer, if this target is the one being edited.
fn editing_value(app: &App, target: AdminEditTarget) -> Option<String> {
    match &app.admin_ui.edit {
        Some((active, buffer)) if *active == target => Some(buffer.clone()),
        _ => None,
    }
}

fn displayed_value(app: &App, field: AdminField) -> String {
    let Some(session) = app.admin.as_ref() else {
        return String::new();
    };
    let draft = session.draft();
    match field {
        AdminField::Title => draft.title.clone().unwrap_or_else(|| "(default)".into()),
        AdminField::Description => draft.description.clone(),
        AdminField::Color => draft.color.clone().unwrap_or_else(|| "default".into()),
        AdminField::ImageUrl => match &draft.image {
            ImageSource::Url(url) => url.clone(),
            ImageSource::Inline(data) => format!("inline ({} bytes)", data.len()),
            ImageSource::DefaultArt => "(default art)".into(),
        },
        AdminField::StreamLink => draft.stream_link.clone().unwrap_or_else(|| "-".into()),
        AdminField::ClipLink => draft.clip_link.clone().unwrap_or_else(|| "-".into()),
        AdminField::ForceOpen => checkbox(draft.force_open),
        AdminField::Hidden => checkbox(draft.hidden),
        AdminField::Todos => String::new(),
    }
}

fn checkbox(on: bool) -> String {
    if on { "[x]".into() } else { "[ ]".into() }
}
