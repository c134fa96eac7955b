//! Activity entry data model

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// Kind of repository activity reported by the backend
///
/// Unrecognized action strings are preserved in [`ActionKind::Other`] so the
/// original text can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ActionKind {
    /// Commits pushed to a branch
    Push,
    /// Pull request opened
    PullRequest,
    /// Pull request merged
    Merge,
    /// Any action kind the backend may add later
    Other(String),
}

impl From<String> for ActionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PUSH" => ActionKind::Push,
            "PULL_REQUEST" => ActionKind::PullRequest,
            "MERGE" => ActionKind::Merge,
            _ => ActionKind::Other(raw),
        }
    }
}

impl ActionKind {
    /// The wire-format action string
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Push => "PUSH",
            ActionKind::PullRequest => "PULL_REQUEST",
            ActionKind::Merge => "MERGE",
            ActionKind::Other(raw) => raw,
        }
    }
}

/// One activity record received from the logs endpoint
///
/// Entries are immutable once received. Every poll replaces the previous
/// batch wholesale; nothing is merged or kept across ticks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    /// Backend identifier of the originating event (head commit SHA for
    /// pushes, pull request id otherwise). Used as row identity.
    #[serde(default)]
    pub request_id: Option<String>,

    /// Display name of the actor
    pub author: String,

    /// What happened
    pub action: ActionKind,

    /// Source branch, present only for actions that have one
    #[serde(default)]
    pub from_branch: Option<String>,

    /// Branch the action targets
    pub to_branch: String,

    /// Timestamp as serialized by the backend, kept raw so an unparseable
    /// value can be shown unchanged
    pub timestamp: String,
}

/// Role of a message segment, used by the renderer to style it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePartKind {
    /// Fixed template text (or the raw action of an unknown kind)
    Text,
    /// The actor's display name
    Author,
    /// A branch name
    Branch,
}

/// One segment of a formatted activity message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePart {
    pub kind: MessagePartKind,
    pub text: String,
}

impl MessagePart {
    fn text(value: impl Into<String>) -> Self {
        Self {
            kind: MessagePartKind::Text,
            text: value.into(),
        }
    }

    fn author(value: impl Into<String>) -> Self {
        Self {
            kind: MessagePartKind::Author,
            text: value.into(),
        }
    }

    fn branch(value: impl Into<String>) -> Self {
        Self {
            kind: MessagePartKind::Branch,
            text: value.into(),
        }
    }
}

impl LogEntry {
    /// Build the display message as typed segments
    ///
    /// A missing `from_branch` renders as an empty segment; templates must
    /// never fail on absent fields.
    pub fn message_parts(&self) -> Vec<MessagePart> {
        let author = MessagePart::author(self.author.as_str());
        let from_branch = self.from_branch.as_deref().unwrap_or("");

        match &self.action {
            ActionKind::Push => vec![
                author,
                MessagePart::text(" pushed to "),
                MessagePart::branch(self.to_branch.as_str()),
            ],
            ActionKind::PullRequest => vec![
                author,
                MessagePart::text(" submitted a pull request from "),
                MessagePart::branch(from_branch),
                MessagePart::text(" to "),
                MessagePart::branch(self.to_branch.as_str()),
            ],
            ActionKind::Merge => vec![
                author,
                MessagePart::text(" merged branch "),
                MessagePart::branch(from_branch),
                MessagePart::text(" to "),
                MessagePart::branch(self.to_branch.as_str()),
            ],
            ActionKind::Other(raw) => vec![
                author,
                MessagePart::text(format!(" performed {} on ", raw)),
                MessagePart::branch(self.to_branch.as_str()),
            ],
        }
    }

    /// The full display message as a single string
    pub fn message(&self) -> String {
        self.message_parts()
            .iter()
            .map(|part| part.text.as_str())
            .collect()
    }

    /// Parse the raw timestamp, if possible
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }

    /// Human-readable timestamp, falling back to the raw string when the
    /// value cannot be parsed
    pub fn display_timestamp(&self) -> String {
        match self.parsed_timestamp() {
            Some(parsed) => parsed.format("%B %-d, %Y at %I:%M %p UTC").to_string(),
            None => self.timestamp.clone(),
        }
    }
}

/// Parse the timestamp formats GitHub events carry: RFC 3339 with offset or
/// `Z`, or a bare datetime assumed to be UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Order entries newest first
///
/// The sort is stable: equal timestamps keep their arrival order, and
/// entries whose timestamp cannot be parsed sort after all parseable ones.
pub fn sort_newest_first(entries: &mut [LogEntry]) {
    entries.sort_by(|a, b| b.parsed_timestamp().cmp(&a.parsed_timestamp()));
}
