/// Request handlers for the dashboard server

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::AppState;
use crate::core::dashboard::DashboardSummary;
use crate::core::render::render_error_page;
use crate::core::{DashboardError, MembersPolicy};
use crate::utils::GENERIC_LOAD_ERROR;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg),
        }
    }
}

#[derive(Serialize)]
pub struct HealthInfo {
    status: &'static str,
    version: &'static str,
    upstream: String,
    members_policy: MembersPolicy,
}

fn status_for(err: &DashboardError) -> StatusCode {
    if err.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

// ============================================================================
// Dashboard
// ============================================================================

fn error_page() -> String {
    render_error_page(GENERIC_LOAD_ERROR).unwrap_or_else(|e| {
        tracing::error!(error = %e, "error page render failed");
        GENERIC_LOAD_ERROR.to_string()
    })
}

pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Response {
    match state.view.render_page().await {
        Ok(html) => (
            [(header::CACHE_CONTROL, "no-store")],
            Html(html),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "dashboard render failed");
            (
                status_for(&e),
                [(header::CACHE_CONTROL, "no-store")],
                Html(error_page()),
            )
                .into_response()
        }
    }
}

// ============================================================================
// JSON API
// ============================================================================

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<DashboardSummary>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.view.summary().await {
        Ok(summary) => Ok(Json(ApiResponse::ok(summary))),
        Err(e) => {
            tracing::error!(error = %e, "summary failed");
            Err((status_for(&e), Json(ApiResponse::error(GENERIC_LOAD_ERROR.to_string()))))
        }
    }
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthInfo>> {
    Json(ApiResponse::ok(HealthInfo {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        upstream: state.config.admin_data_url(),
        members_policy: state.config.members_policy,
    }))
}
