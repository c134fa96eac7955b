//! Blocking HTTP client for the logs endpoint

use crate::model::LogEntry;

use super::ApiError;

/// Path of the logs endpoint, relative to the service base URL
const LOGS_PATH: &str = "/api/logs";

/// Client for `GET /api/logs`
///
/// Cheap to clone; clones share the underlying connection pool, so each
/// background poll can carry its own handle.
#[derive(Debug, Clone)]
pub struct LogsClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl LogsClient {
    /// Create a client for the service at `base_url`
    ///
    /// A trailing slash on the base URL is tolerated. No request timeout is
    /// configured beyond the transport's own default; a slow endpoint delays
    /// that cycle's outcome, nothing else.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), LOGS_PATH),
        })
    }

    /// Full URL this client polls
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current activity log
    ///
    /// Any non-2xx status is a failure. The body is decoded in a second
    /// step so transport and decode problems surface as distinct errors.
    pub fn fetch_logs(&self) -> Result<Vec<LogEntry>, ApiError> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
