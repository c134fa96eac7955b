//! Application state

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::api::{FeedSource, Poller};
use crate::model::{ConnectionStatus, Notification};
use crate::ui::views::FeedView;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Activity feed state
    pub feed_view: FeedView,
    /// Outcome of the most recent poll attempt
    pub status: ConnectionStatus,
    /// Wall-clock time of the last successful poll
    pub last_updated: Option<DateTime<Utc>>,
    /// Is periodic polling suspended?
    pub paused: bool,
    /// Help overlay visible?
    pub show_help: bool,
    /// Help overlay scroll offset
    pub help_scroll: u16,
    /// Notification to display (info/warning messages)
    pub notification: Option<Notification>,
    /// Poll dispatcher
    pub(crate) poller: Poller,
    /// Time between periodic polls
    pub(crate) interval: Duration,
    /// When the next periodic poll fires (None while stopped)
    pub(crate) next_poll_at: Option<Instant>,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// Polling does not begin until [`App::start`] is called.
    pub fn new(source: FeedSource, interval: Duration) -> Self {
        Self {
            running: true,
            feed_view: FeedView::new(),
            status: ConnectionStatus::Idle,
            last_updated: None,
            paused: false,
            show_help: false,
            help_scroll: 0,
            notification: None,
            poller: Poller::new(source),
            interval,
            next_poll_at: None,
        }
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
