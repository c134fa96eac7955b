//! Feed View - displays repository activity
//!
//! The main view of Hooktail, showing webhook events newest first.

mod render;

use crate::model::{LogEntry, sort_newest_first};

/// What the feed body should show
///
/// The view starts in `Loading` and leaves it exactly once: to `Failed`
/// when the first poll errors out, or to `Ready` when any batch (even an
/// empty one) is applied. Once `Ready`, later failures never bring the
/// placeholder back; the previous contents stay on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    /// No poll has completed yet
    #[default]
    Loading,
    /// Every poll so far has failed
    Failed,
    /// At least one batch has been applied
    Ready,
}

/// Feed View state
#[derive(Debug, Default)]
pub struct FeedView {
    /// Entries to display, newest first
    pub entries: Vec<LogEntry>,
    /// Currently selected index in `entries`
    pub selected_index: usize,
    /// Scroll offset for display
    pub scroll_offset: usize,
    phase: FeedPhase,
}

pub mod empty_text {
    pub const TITLE: &str = "No activity yet";
    pub const HINT: &str = "Waiting for webhook events to arrive";
}

pub mod error_text {
    pub const TITLE: &str = "Failed to load activity data";
    pub const HINT: &str = "Check your connection and try again";
}

pub mod loading_text {
    pub const TITLE: &str = "Loading activity...";
}

impl FeedView {
    /// Create a new FeedView
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    /// Replace the feed with a fresh batch
    ///
    /// Entries are sorted newest first before display. Selection follows the
    /// previously selected entry's `request_id` when it is still present in
    /// the new batch; otherwise it stays at the same position, clamped to
    /// the new length.
    pub fn set_entries(&mut self, mut entries: Vec<LogEntry>) {
        sort_newest_first(&mut entries);

        let previous_id = self
            .selected_entry()
            .and_then(|entry| entry.request_id.clone());

        self.entries = entries;
        self.phase = FeedPhase::Ready;

        let followed = previous_id.as_deref().and_then(|id| {
            self.entries
                .iter()
                .position(|entry| entry.request_id.as_deref() == Some(id))
        });

        self.selected_index = followed
            .unwrap_or_else(|| self.selected_index.min(self.entries.len().saturating_sub(1)));
    }

    /// Record a failed poll
    ///
    /// Only moves `Loading` to `Failed`; once any batch has been applied the
    /// feed keeps showing what it has.
    pub fn mark_failed(&mut self) {
        if self.phase == FeedPhase::Loading {
            self.phase = FeedPhase::Failed;
        }
    }

    /// Get the currently selected entry
    pub fn selected_entry(&self) -> Option<&LogEntry> {
        self.entries.get(self.selected_index)
    }

    /// Move selection up (toward newer entries)
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (toward older entries)
    pub fn move_down(&mut self) {
        if self.selected_index < self.entries.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Move to the newest entry
    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Move to the oldest entry
    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.entries.len().saturating_sub(1);
    }
}
