//! Synthetic feed for running without a backend

use chrono::{DateTime, Duration, Utc};

use crate::model::{ActionKind, LogEntry};

/// Batch size of the first demo poll
const INITIAL_ENTRIES: usize = 6;

/// Upper bound on generated history
const MAX_ENTRIES: usize = 30;

/// Seconds between consecutive demo events
const EVENT_SPACING_SECS: i64 = 173;

// Cycle length coprime to the four action kinds, so every author pairs with
// every kind somewhere in the history (merges by "unknown" included).
const AUTHORS: [&str; 5] = ["alice", "bob", "carol", "dave", "unknown"];
const FEATURE_BRANCHES: [&str; 3] = ["feature/login", "feature/retry", "hotfix/timestamps"];

/// Deterministic stand-in for the logs endpoint
///
/// Every batch contains the previous one plus one newer event, so refresh
/// behavior is visible offline. Entries are generated oldest first; ordering
/// is left to the renderer, same as for real responses.
#[derive(Debug)]
pub struct DemoFeed {
    /// Wall-clock anchor; the newest possible event lands here
    base: DateTime<Utc>,
    /// Batches handed out so far
    batches: u64,
}

impl DemoFeed {
    pub fn new() -> Self {
        Self {
            base: Utc::now(),
            batches: 0,
        }
    }

    /// Produce the next batch
    pub fn next_batch(&mut self) -> Vec<LogEntry> {
        self.batches += 1;
        let count = (INITIAL_ENTRIES + self.batches as usize - 1).min(MAX_ENTRIES);

        (0..count).map(|index| self.entry(index)).collect()
    }

    /// Build the demo event at `index` (0 = oldest)
    ///
    /// Timestamps depend only on the index, so an entry keeps its timestamp
    /// across batches just like real history would. Shapes mirror what the
    /// webhook logger records: pushes carry the same source and target
    /// branch, merges may come from an unknown author.
    fn entry(&self, index: usize) -> LogEntry {
        let author = AUTHORS[index % AUTHORS.len()];
        let feature = FEATURE_BRANCHES[index % FEATURE_BRANCHES.len()];
        let age = (MAX_ENTRIES - index) as i64 * EVENT_SPACING_SECS;
        let timestamp = (self.base - Duration::seconds(age)).to_rfc3339();

        let (action, from_branch, to_branch) = match index % 4 {
            0 => (ActionKind::Push, Some("main"), "main"),
            1 => (ActionKind::PullRequest, Some(feature), "main"),
            2 => (ActionKind::Merge, Some(feature), "main"),
            _ => (ActionKind::Other("TAG".to_string()), None, "main"),
        };

        LogEntry {
            request_id: Some(format!("demo-{index:04}")),
            author: author.to_string(),
            action,
            from_branch: from_branch.map(str::to_string),
            to_branch: to_branch.to_string(),
            timestamp,
        }
    }
}

impl Default for DemoFeed {
    fn default() -> Self {
        Self::new()
    }
}
