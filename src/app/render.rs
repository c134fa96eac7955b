//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::state::App;
use crate::keys;
use crate::ui::widgets::{
    render_help_panel, render_status_bar, render_status_line, status_bar_height,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Clone notification to avoid borrow conflict with &mut self in FeedView::render
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        let area = frame.area();
        let hints = keys::feed_hints(self.paused);
        let sb_height = status_bar_height(hints, area.width);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(sb_height),
        };

        // Status line on top, feed below
        let chunks =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(main_area);

        render_status_line(
            frame,
            chunks[0],
            self.status,
            self.paused,
            self.last_updated,
        );
        self.feed_view.render(frame, chunks[1], notification.as_ref());
        render_status_bar(frame, hints);

        // Render help overlay on top of everything
        if self.show_help {
            render_help_panel(frame, area, self.help_scroll);
        }
    }
}
