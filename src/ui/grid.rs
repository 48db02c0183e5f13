use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};

use crate::app::{App, GRID_COLS};
use crate::content::LAST_DAY;

use super::color;

/// Builds the 6x4 door grid. Each cell is a fixed-width chip tinted with
/// the day's resolved theme; hidden days render as a blank slot.
pub fn build_grid(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("")];

    for row in (1..=LAST_DAY).step_by(GRID_COLS) {
        let mut spans = vec![Span::raw(" ")];
        for day in row..row + GRID_COLS as u8 {
            spans.push(cell_span(app, day));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    lines
}

fn cell_span(app: &App, day: u8) -> Span<'static> {
    let cell = app.cell_view(day);
    let under_cursor = app.cursor_day() == day;
    let label = if cell.hidden {
        "  ??  ".to_string()
    } else {
        format!("  {day:>2}  ")
    };

    let mut style = if cell.hidden {
        Style::default().fg(Color::DarkGray)
    } else if cell.is_clicked {
        Style::default().fg(Color::Black).bg(color(cell.theme.flash))
    } else if cell.is_revealed {
        Style::default()
            .fg(color(cell.theme.text))
            .bg(color(cell.theme.glow))
    } else {
        Style::default().fg(color(cell.theme.hover_border))
    };

    if under_cursor && !cell.is_locked {
        style = style.reversed();
    }
    if cell.is_locked && !cell.is_clicked {
        style = style.dim();
    }

    Span::styled(label, style)
}
