/// HTTP client for the registration backend's admin API

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Instant;

use super::config::DashboardConfig;
use super::error::{DashboardError, DashboardResult};
use super::models::DashboardSnapshot;

/// Fetches admin snapshots. Holds a connection pool but never caches responses.
#[derive(Clone)]
pub struct AdminApiClient {
    client: Client,
    url: String,
}

/// Outcome of a connectivity probe against the admin endpoint
#[derive(Debug, Serialize)]
pub struct ProbeResult {
    pub success: bool,
    pub status: Option<u16>,
    pub registration_count: Option<usize>,
    pub total_users: Option<i64>,
    pub response_time_ms: u128,
    pub error: Option<String>,
}

impl AdminApiClient {
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("hackathon-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: config.admin_data_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Read the current snapshot, bypassing intermediate caches
    pub async fn fetch_snapshot(&self) -> DashboardResult<DashboardSnapshot> {
        tracing::debug!(url = %self.url, "fetching admin snapshot");

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, %status, "admin snapshot fetch failed");
            return Err(DashboardError::FetchFailed { status });
        }

        let body = response.text().await?;
        let snapshot = DashboardSnapshot::from_json(&body).map_err(DashboardError::MalformedPayload)?;

        tracing::info!(
            registrations = snapshot.registration_count(),
            total_users = snapshot.total_users,
            "admin snapshot loaded"
        );

        Ok(snapshot)
    }

    /// Fetch once and report reachability instead of failing
    pub async fn probe(&self) -> ProbeResult {
        let start = Instant::now();
        let result = self.fetch_snapshot().await;
        let elapsed = start.elapsed().as_millis();

        match result {
            Ok(snapshot) => ProbeResult {
                success: true,
                status: Some(StatusCode::OK.as_u16()),
                registration_count: Some(snapshot.registration_count()),
                total_users: Some(snapshot.total_users),
                response_time_ms: elapsed,
                error: None,
            },
            Err(e) => ProbeResult {
                success: false,
                status: match &e {
                    DashboardError::FetchFailed { status } => Some(status.as_u16()),
                    DashboardError::MalformedPayload(_) => Some(StatusCode::OK.as_u16()),
                    _ => None,
                },
                registration_count: None,
                total_users: None,
                response_time_ms: elapsed,
                error: Some(e.to_string()),
            },
        }
    }
}
