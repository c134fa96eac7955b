//! Help panel widget
//!
//! Renders the key binding overlay. `build_help_lines()` is the single
//! source of truth for the overlay's content and length.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::keys;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Feed", keys::FEED_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", entry.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render the help overlay centered on top of the current screen
///
/// `scroll` is the vertical scroll offset (0 = top). Values beyond the
/// content length are clamped by ratatui's Paragraph.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let lines = build_help_lines();

    // +2 for borders; cap to the available screen
    let width = 46.min(area.width.saturating_sub(2));
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let panel_area = centered_rect(width, height, area);

    frame.render_widget(Clear, panel_area);

    let title = Line::from(" Hooktail - Help ").bold().cyan().centered();
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        panel_area,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_help_lines_cover_all_sections() {
        let lines = build_help_lines();
        let all: Vec<String> = lines.iter().map(line_text).collect();
        for section in ["Global:", "Navigation:", "Feed:"] {
            assert!(
                all.iter().any(|l| l == section),
                "missing section {section}"
            );
        }
    }

    #[test]
    fn test_help_lines_include_every_binding() {
        let lines = build_help_lines();
        let joined: String = lines.iter().map(line_text).collect::<Vec<_>>().join("\n");
        for entry in keys::GLOBAL_KEYS
            .iter()
            .chain(keys::NAV_KEYS)
            .chain(keys::FEED_KEYS)
        {
            assert!(joined.contains(entry.key), "missing key {}", entry.key);
            assert!(
                joined.contains(entry.description),
                "missing description {}",
                entry.description
            );
        }
    }

    #[test]
    fn test_centered_rect_is_contained() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(46, 18, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert!(rect.x >= area.x && rect.x + rect.width <= area.x + area.width);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(46, 18, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
