//! Status bar widget
//!
//! Renders key-hint badges in the bottom rows of the screen. Badges wrap
//! onto additional rows on narrow terminals instead of truncating.

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Display width of one badge: " [key] label "
fn badge_width(hint: &KeyHint) -> usize {
    hint.key.chars().count() + hint.label.chars().count() + 5
}

/// Group badges into rows that fit `width`
///
/// Every row holds at least one badge, so an absurdly narrow terminal
/// degrades to one badge per row rather than an empty bar.
fn badge_rows(hints: &[KeyHint], width: u16) -> Vec<Vec<KeyHint>> {
    let width = width as usize;
    let mut rows: Vec<Vec<KeyHint>> = Vec::new();
    let mut row: Vec<KeyHint> = Vec::new();
    let mut used = 0;

    for hint in hints {
        let needed = badge_width(hint) + if row.is_empty() { 0 } else { 1 };
        if !row.is_empty() && used + needed > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        used += if row.is_empty() {
            badge_width(hint)
        } else {
            needed
        };
        row.push(*hint);
    }

    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

/// Number of rows the status bar needs at `width`
pub fn status_bar_height(hints: &[KeyHint], width: u16) -> u16 {
    badge_rows(hints, width).len() as u16
}

/// Build one status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Render the status bar in the bottom rows of the screen
pub fn render_status_bar(frame: &mut Frame, hints: &[KeyHint]) {
    let area = frame.area();
    let rows = badge_rows(hints, area.width);
    let height = rows.len() as u16;
    if area.height <= height {
        return;
    }

    let bar_area = Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    };

    let lines: Vec<Line> = rows.iter().map(|row| build_status_bar(row)).collect();
    frame.render_widget(Paragraph::new(lines), bar_area);
}
