/// HTTP server module for the admin dashboard
/// Serves the rendered dashboard and a small JSON API over the same core

#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub mod handlers;

#[cfg(feature = "server")]
pub use routes::create_router;

use crate::core::{AdminDashboardView, DashboardConfig};

/// Shared, read-only router state
pub struct AppState {
    pub config: DashboardConfig,
    pub view: AdminDashboardView,
}

#[cfg(feature = "server")]
pub async fn run(config: DashboardConfig, host: String, port: u16, enable_cors: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    use std::net::SocketAddr;
    use std::sync::Arc;

    let view = AdminDashboardView::new(&config).context("Failed to create API client")?;
    let upstream = config.admin_data_url();
    let state = Arc::new(AppState { config, view });
    let app = create_router(state, enable_cors);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    println!("🚀 Hackathon Admin Dashboard");
    println!("   📍 Dashboard: http://{}/", addr);
    println!("   🔌 API:       http://{}/api", addr);
    println!("   ⬆️  Upstream:  {}", upstream);
    println!();
    println!("📚 Endpoints:");
    println!("   GET  /                       - Rendered dashboard");
    println!("   GET  /admin                  - Rendered dashboard");
    println!("   GET  /api/snapshot/summary   - Registration summary (JSON)");
    println!("   GET  /api/health             - Health check");
    println!();

    tracing::info!(%addr, %upstream, cors = enable_cors, "dashboard server starting");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
