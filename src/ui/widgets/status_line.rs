//! Connection status line widget
//!
//! One row above the feed carrying the status dot, the status label, an
//! optional paused marker, and the last-updated clock. Together these are
//! the indicator regions the poll loop keeps in sync with its outcomes.

use chrono::{DateTime, Utc};
use ratatui::{Frame, prelude::*, widgets::Paragraph};

use crate::model::ConnectionStatus;
use crate::ui::{symbols, theme};

/// Render format of the last-updated clock
const LAST_UPDATED_FORMAT: &str = "%H:%M:%S UTC";

/// Build the status line spans
pub fn build_status_line(
    status: ConnectionStatus,
    paused: bool,
    last_updated: Option<DateTime<Utc>>,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", symbols::markers::DOT),
            Style::default().fg(theme::status_color(status)),
        ),
        Span::raw(status.label()),
    ];

    if paused {
        spans.push(Span::styled(
            "  [paused]",
            Style::default().fg(theme::status::PAUSED).bold(),
        ));
    }

    if let Some(at) = last_updated {
        spans.push(Span::styled(
            format!("  Last updated: {}", at.format(LAST_UPDATED_FORMAT)),
            Style::default().fg(theme::status::LAST_UPDATED),
        ));
    }

    Line::from(spans)
}

/// Render the status line into `area`
pub fn render_status_line(
    frame: &mut Frame,
    area: Rect,
    status: ConnectionStatus,
    paused: bool,
    last_updated: Option<DateTime<Utc>>,
) {
    let line = build_status_line(status, paused, last_updated);
    frame.render_widget(Paragraph::new(line), area);
}
