//! Placeholder content for the feed area
//!
//! Used while the first poll is in flight and when the backend has no
//! events to report yet.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Build a centered placeholder with an optional dimmed hint below it.
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(""),
        Line::from(title.to_string()).bold().centered(),
    ];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    Paragraph::new(lines)
}
