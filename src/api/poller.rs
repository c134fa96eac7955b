//! Background polling with stale-response protection
//!
//! Each dispatched poll runs on its own short-lived thread and reports back
//! over a channel, tagged with a monotonically increasing sequence number.
//! When the endpoint is slower than the poll period, several requests can be
//! outstanding at once; draining keeps only the outcome of the most recently
//! issued request, so display state never regresses to an older response.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::model::LogEntry;

use super::{ApiError, DemoFeed, LogsClient};

/// Where poll batches come from
#[derive(Debug)]
pub enum FeedSource {
    /// The real logs endpoint
    Live(LogsClient),
    /// Synthetic entries for running without a backend
    Demo(DemoFeed),
}

/// Result of one poll, tagged with the sequence number of its request
#[derive(Debug)]
pub struct PollOutcome {
    pub seq: u64,
    pub result: Result<Vec<LogEntry>, ApiError>,
}

/// Issues polls and collects their outcomes
#[derive(Debug)]
pub struct Poller {
    source: FeedSource,
    tx: Sender<PollOutcome>,
    rx: Receiver<PollOutcome>,
    /// Sequence number of the most recently issued request (0 = none yet)
    last_seq: u64,
}

impl Poller {
    /// Create a poller over the given source
    pub fn new(source: FeedSource) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            last_seq: 0,
        }
    }

    /// Issue one poll
    ///
    /// Live polls run on a background thread; the demo source answers
    /// through the same channel immediately. Never blocks.
    pub fn dispatch(&mut self) {
        self.last_seq += 1;
        let seq = self.last_seq;

        match &mut self.source {
            FeedSource::Live(client) => {
                let client = client.clone();
                let tx = self.tx.clone();
                thread::spawn(move || {
                    let outcome = PollOutcome {
                        seq,
                        result: client.fetch_logs(),
                    };
                    // The receiver is gone only during shutdown.
                    let _ = tx.send(outcome);
                });
            }
            FeedSource::Demo(feed) => {
                let outcome = PollOutcome {
                    seq,
                    result: Ok(feed.next_batch()),
                };
                let _ = self.tx.send(outcome);
            }
        }
    }

    /// Drain completed polls, returning the freshest applicable outcome
    ///
    /// Outcomes whose sequence number does not match the most recently
    /// issued request are stale and discarded.
    pub fn try_latest(&mut self) -> Option<PollOutcome> {
        let mut latest = None;

        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.seq == self.last_seq {
                latest = Some(outcome);
            } else {
                tracing::debug!(
                    seq = outcome.seq,
                    last_seq = self.last_seq,
                    "discarding stale poll outcome"
                );
            }
        }

        latest
    }
}
