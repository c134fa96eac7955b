//! Polling lifecycle
//!
//! One poll fires immediately on start, then one per interval. Outcomes
//! are applied on the event-loop tick, so display state only ever changes
//! between frames.

use std::time::Instant;

use chrono::Utc;

use crate::api::PollOutcome;
use crate::model::{ConnectionStatus, Notification};

use super::state::App;

impl App {
    /// Begin periodic polling with an immediate first poll
    pub fn start(&mut self) {
        self.poll();
        self.next_poll_at = Some(Instant::now() + self.interval);
    }

    /// Stop periodic polling
    ///
    /// Safe to call when already stopped. An in-flight request keeps
    /// running; its outcome is still applied when it lands.
    pub fn stop(&mut self) {
        self.next_poll_at = None;
    }

    /// Issue a single poll
    fn poll(&mut self) {
        self.status = ConnectionStatus::Connecting;
        self.poller.dispatch();
    }

    /// Advance time-driven state
    ///
    /// Fires the periodic poll when its deadline has passed, then applies
    /// the freshest finished outcome. Called once per event-loop iteration.
    pub fn on_tick(&mut self) {
        self.clear_expired_notification();

        if let Some(deadline) = self.next_poll_at
            && Instant::now() >= deadline
        {
            self.poll();
            self.next_poll_at = Some(Instant::now() + self.interval);
        }

        if let Some(outcome) = self.poller.try_latest() {
            self.apply_outcome(outcome);
        }
    }

    /// Apply one poll outcome to the display state
    fn apply_outcome(&mut self, outcome: PollOutcome) {
        match outcome.result {
            Ok(entries) => {
                tracing::debug!(seq = outcome.seq, count = entries.len(), "applying batch");
                self.feed_view.set_entries(entries);
                self.status = ConnectionStatus::Connected;
                self.last_updated = Some(Utc::now());
            }
            Err(err) => {
                tracing::warn!(seq = outcome.seq, error = %err, "poll failed");
                self.feed_view.mark_failed();
                self.status = ConnectionStatus::Error;
            }
        }
    }

    /// Suspend or resume periodic polling (Space)
    ///
    /// Resuming polls immediately, so a long pause never shows stale data
    /// for a full interval.
    pub fn toggle_paused(&mut self) {
        if self.paused {
            self.paused = false;
            self.start();
            self.notification = Some(Notification::info("Polling resumed"));
        } else {
            self.paused = true;
            self.stop();
            self.notification = Some(Notification::warning("Polling paused"));
        }
    }

    /// Poll now instead of waiting for the next deadline (r / Ctrl+L)
    ///
    /// Works while paused without resuming the schedule. When running, the
    /// periodic deadline restarts from now so the manual poll and the next
    /// periodic one do not bunch up.
    pub fn refresh_now(&mut self) {
        self.poll();
        if !self.paused {
            self.next_poll_at = Some(Instant::now() + self.interval);
        }
        self.notification = Some(Notification::info("Refreshing feed"));
    }
}
