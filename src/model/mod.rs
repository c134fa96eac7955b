//! Data models for Hooktail
//!
//! This module contains UI-independent data structures representing
//! repository activity: log entries, connection status, and transient
//! notifications.

mod entry;
mod notification;
mod status;

pub use entry::{ActionKind, LogEntry, MessagePart, MessagePartKind, sort_newest_first};
pub use notification::{Notification, NotificationKind};
pub use status::ConnectionStatus;
