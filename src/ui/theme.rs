//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

use crate::model::{ActionKind, ConnectionStatus};

/// Colors for the activity feed
pub mod feed {
    use super::*;

    /// Push icon color
    pub const PUSH_ICON: Color = Color::Green;
    /// Pull request icon color
    pub const PULL_REQUEST_ICON: Color = Color::Blue;
    /// Merge icon color
    pub const MERGE_ICON: Color = Color::Magenta;
    /// Icon color for unrecognized actions
    pub const OTHER_ICON: Color = Color::DarkGray;
    /// Branch name color
    pub const BRANCH: Color = Color::Cyan;
    /// Timestamp color
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::DarkGray;
    /// First-load failure title color
    pub const ERROR_TITLE: Color = Color::Red;
}

/// Colors for the connection status line
pub mod status {
    use super::*;

    /// Dot color before the first poll
    pub const IDLE: Color = Color::DarkGray;
    /// Dot color while a request is in flight
    pub const CONNECTING: Color = Color::Yellow;
    /// Dot color after a successful poll
    pub const CONNECTED: Color = Color::Green;
    /// Dot color after a failed poll
    pub const ERROR: Color = Color::Red;
    /// Paused marker color
    pub const PAUSED: Color = Color::Yellow;
    /// Last-updated label color
    pub const LAST_UPDATED: Color = Color::DarkGray;
}

/// Icon color for an action kind
pub fn action_color(action: &ActionKind) -> Color {
    match action {
        ActionKind::Push => feed::PUSH_ICON,
        ActionKind::PullRequest => feed::PULL_REQUEST_ICON,
        ActionKind::Merge => feed::MERGE_ICON,
        ActionKind::Other(_) => feed::OTHER_ICON,
    }
}

/// Dot color for a connection status
pub fn status_color(status: ConnectionStatus) -> Color {
    match status {
        ConnectionStatus::Idle => status::IDLE,
        ConnectionStatus::Connecting => status::CONNECTING,
        ConnectionStatus::Connected => status::CONNECTED,
        ConnectionStatus::Error => status::ERROR,
    }
}
