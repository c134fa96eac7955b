//! Rendering for FeedView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{LogEntry, MessagePartKind, Notification};
use crate::ui::{components, symbols, theme};

use super::{FeedPhase, FeedView, empty_text, error_text, loading_text};

impl FeedView {
    /// Render the view with optional notification in title bar
    pub fn render(&mut self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = Line::from(" Hooktail - Activity Feed ").bold().cyan().centered();

        // Build notification line for title bar (with truncation if needed)
        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize; // +4 for borders/padding
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        match self.phase() {
            FeedPhase::Loading => {
                let paragraph = components::empty_state(loading_text::TITLE, None).block(block);
                frame.render_widget(paragraph, area);
            }
            FeedPhase::Failed => {
                frame.render_widget(error_placeholder().block(block), area);
            }
            FeedPhase::Ready if self.entries.is_empty() => {
                let paragraph = components::empty_state(empty_text::TITLE, Some(empty_text::HINT))
                    .block(block);
                frame.render_widget(paragraph, area);
            }
            FeedPhase::Ready => {
                self.render_entries(frame, area, block);
            }
        }
    }

    fn render_entries(&self, frame: &mut Frame, area: Rect, block: ratatui::widgets::Block<'static>) {
        let inner_height = area.height.saturating_sub(2) as usize; // borders
        if inner_height == 0 {
            return;
        }

        // Calculate scroll offset to keep selection visible
        let scroll_offset = self.calculate_scroll_offset(inner_height);

        let mut lines: Vec<Line> = Vec::new();
        for (idx, entry) in self.entries.iter().enumerate().skip(scroll_offset) {
            if lines.len() >= inner_height {
                break;
            }

            let is_selected = idx == self.selected_index;
            lines.push(build_entry_line(entry, is_selected));
        }

        let paragraph = Paragraph::new(lines).block(block);

        frame.render_widget(paragraph, area);
    }

    fn calculate_scroll_offset(&self, visible_entries: usize) -> usize {
        if visible_entries == 0 {
            return 0;
        }

        let mut offset = self.scroll_offset;

        // Ensure selected item is visible
        if self.selected_index < offset {
            offset = self.selected_index;
        } else if self.selected_index >= offset + visible_entries {
            offset = self.selected_index - visible_entries + 1;
        }

        offset
    }
}

/// Build one feed row
///
/// Backend-controlled text goes through [`components::plain`] so control
/// characters cannot corrupt the terminal.
fn build_entry_line(entry: &LogEntry, is_selected: bool) -> Line<'static> {
    let mut spans = Vec::new();

    // Action icon
    spans.push(Span::styled(
        format!(" {} ", symbols::action_icon(&entry.action)),
        Style::default().fg(theme::action_color(&entry.action)),
    ));

    // Message segments
    for part in entry.message_parts() {
        let text = components::plain(&part.text);
        let span = match part.kind {
            MessagePartKind::Author => {
                Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
            }
            MessagePartKind::Branch => {
                Span::styled(text, Style::default().fg(theme::feed::BRANCH))
            }
            MessagePartKind::Text => Span::raw(text),
        };
        spans.push(span);
    }

    // Timestamp
    spans.push(Span::styled(
        format!("  {}", components::plain(&entry.display_timestamp())),
        Style::default().fg(theme::feed::TIMESTAMP),
    ));

    let mut line = Line::from(spans);

    if is_selected {
        line = line.style(
            Style::default()
                .bg(theme::feed::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        );
    }

    line
}

/// Placeholder shown when the very first load fails
fn error_placeholder() -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(format!("{} {}", symbols::markers::WARNING, error_text::TITLE))
            .style(
                Style::default()
                    .fg(theme::feed::ERROR_TITLE)
                    .add_modifier(Modifier::BOLD),
            )
            .centered(),
        Line::from(""),
        Line::from(error_text::HINT).dark_gray().centered(),
    ];

    Paragraph::new(lines)
}
