/// Error taxonomy for loading and rendering the dashboard

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("fetch failed: HTTP {status}")]
    FetchFailed { status: StatusCode },

    #[error("fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed admin payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("malformed members data for registration {record_id}: {source}")]
    MalformedMembers {
        record_id: i64,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),
}

impl DashboardError {
    /// True for errors caused by the upstream API rather than local setup
    pub fn is_upstream(&self) -> bool {
        !matches!(self, DashboardError::Config(_) | DashboardError::Render(_))
    }
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
