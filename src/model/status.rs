//! Connection status model

/// Outcome of the most recent poll attempt
///
/// Overwritten on every attempt: `Connecting` just before a request is
/// dispatched, then `Connected` or `Error` when its outcome is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No poll has been dispatched yet
    #[default]
    Idle,
    /// A request is in flight
    Connecting,
    /// The last request succeeded
    Connected,
    /// The last request failed
    Error,
}

impl ConnectionStatus {
    /// Short label shown next to the status dot
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "Starting...",
            ConnectionStatus::Connecting => "Fetching updates...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Error => "Connection error",
        }
    }
}
