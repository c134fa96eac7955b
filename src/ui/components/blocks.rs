//! Block components for UI rendering
//!
//! Common block patterns used across views.

use ratatui::{
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Create a bordered block with an optional notification line in the title bar
///
/// The notification is rendered left-aligned next to the (centered) title.
pub fn bordered_block_with_notification(
    title: Line<'static>,
    notification: Option<Line<'static>>,
) -> Block<'static> {
    let mut block = bordered_block(title);
    if let Some(line) = notification {
        block = block.title(line.left_aligned());
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_bordered_block() {
        let title = Line::from("Test");
        let _block = bordered_block(title);
        // Block is created without panic
    }

    #[test]
    fn test_bordered_block_with_notification() {
        let title = Line::from("Feed");
        let notif = Line::from("Info: refreshed");
        let _block = bordered_block_with_notification(title, Some(notif));
    }

    #[test]
    fn test_bordered_block_without_notification() {
        let title = Line::from("Feed");
        let _block = bordered_block_with_notification(title, None);
    }
}
