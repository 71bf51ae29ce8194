//! Client for the school list feed.
//!
//! The UI-facing counterpart of `GET /api/schools`: fetches the list with a
//! soft timeout, maps failures to human-readable messages, defensively
//! filters malformed records, and keeps previously loaded data around when
//! a background refresh fails so the grid never flashes empty.

use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::warn;

use crate::models::SchoolResponse;

/// Soft timeout for list fetches. Past this point the fetch is reported as
/// timed out even if the request is still in flight.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Result of one fetch attempt: the raw record array, or a message meant
/// for display.
type FetchOutcome = Result<Vec<serde_json::Value>, String>;

/// Observable feed state: the loaded list plus loading/error flags.
#[derive(Debug, Default, Clone)]
pub struct FeedState {
    pub schools: Vec<SchoolResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Fetches and holds the school list for a UI.
pub struct SchoolsFeed {
    http: reqwest::Client,
    endpoint: String,
    state: FeedState,
}

impl SchoolsFeed {
    /// Create a feed against a server base URL (no trailing slash).
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/schools", base_url),
            state: FeedState {
                loading: true,
                ..Default::default()
            },
        }
    }

    /// Currently loaded schools.
    pub fn schools(&self) -> &[SchoolResponse] {
        &self.state.schools
    }

    /// True while a user-visible fetch is in progress.
    pub fn loading(&self) -> bool {
        self.state.loading
    }

    /// Display message for the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// User-initiated fetch ("try again"): shows the loading state, clears
    /// the previous error, then fetches.
    pub async fn refetch(&mut self) {
        self.state.loading = true;
        self.state.error = None;
        let outcome = self.fetch().await;
        apply_outcome(&mut self.state, outcome);
    }

    /// Background revalidation: re-fetches without flipping the loading
    /// flag, so the UI does not flicker.
    pub async fn refresh(&mut self) {
        let outcome = self.fetch().await;
        apply_outcome(&mut self.state, outcome);
    }

    async fn fetch(&self) -> FetchOutcome {
        let request = self
            .http
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send();

        let response = match tokio::time::timeout(FETCH_TIMEOUT, request).await {
            Err(_) => return Err("Request timed out. Please try again.".to_string()),
            Ok(Err(e)) => return Err(format!("Network error: {}", e)),
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(status_message(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| "Received malformed data from server".to_string())?;

        match body.get("data").and_then(|d| d.as_array()) {
            Some(records) => Ok(records.clone()),
            None => Err("Received malformed data from server".to_string()),
        }
    }
}

/// Map a non-success HTTP status to a display message.
fn status_message(code: u16) -> String {
    match code {
        404 => "School list endpoint not found".to_string(),
        500 => "Server error while loading schools".to_string(),
        503 => "Service temporarily unavailable. Please try again shortly.".to_string(),
        other => format!("Request failed with status {}", other),
    }
}

/// Fold a fetch outcome into the feed state.
///
/// On success the record array is defensively filtered; entries that do not
/// deserialize into the expected shape are dropped with a warning, never
/// surfaced as an error. On failure a previously loaded list is retained so
/// a transient refresh failure does not clear the grid.
fn apply_outcome(state: &mut FeedState, outcome: FetchOutcome) {
    state.loading = false;

    match outcome {
        Ok(records) => {
            let total = records.len();
            let schools: Vec<SchoolResponse> = records
                .into_iter()
                .filter_map(|record| serde_json::from_value(record).ok())
                .collect();

            if schools.len() < total {
                warn!(
                    "Dropped {} malformed school records from list response",
                    total - schools.len()
                );
            }

            state.schools = schools;
            state.error = None;
        }
        Err(message) => {
            state.error = Some(message);
        }
    }
}
