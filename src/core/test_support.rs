/// Canned-response admin backend for tests
///
/// An axum router on an ephemeral port answers `GET /api/admin/all-data`
/// with a fixed status and body. Request headers are forwarded over a
/// channel so tests can inspect what the client sent.

use axum::http::{header, HeaderMap, StatusCode};
use axum::{routing::get, Router};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::utils::ADMIN_DATA_PATH;

pub struct StubBackend {
    pub base_url: String,
    pub requests: mpsc::UnboundedReceiver<HeaderMap>,
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    format!("http://{}", addr)
}

pub async fn spawn_stub(status: u16, body: impl Into<String>) -> StubBackend {
    let status = StatusCode::from_u16(status).expect("valid status");
    let body = body.into();
    let (tx, rx) = mpsc::unbounded_channel();

    let app = Router::new().route(
        ADMIN_DATA_PATH,
        get(move |headers: HeaderMap| {
            let _ = tx.send(headers);
            let body = body.clone();
            async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );

    StubBackend {
        base_url: serve(app).await,
        requests: rx,
    }
}

/// Accepts the request but never answers within a test's lifetime
pub async fn spawn_silent_stub() -> String {
    let app = Router::new().route(
        ADMIN_DATA_PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::OK
        }),
    );
    serve(app).await
}

/// One registration record as the backend serializes it
pub fn record_value(id: i64, members: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": 3,
        "registration_id": format!("HACK{:05}", id),
        "team_name": format!("Team {}", id),
        "institution_name": "MIT Pune",
        "team_size": 2,
        "members": members,
        "problem_domain": "HealthTech",
        "project_title": format!("Project {}", id),
        "github_repo_link": format!("https://github.com/example/p{}", id),
        "demo_video_url": format!("https://youtu.be/p{}", id),
        "ppt_file": format!("https://cdn.example.com/ppt/p{}.pptx", id),
        "bonafide_file": format!("https://cdn.example.com/bonafide/p{}.pdf", id),
        "agree_to_rules": true,
        "submitted_at": "Tue, 02 Jan 2024 10:00:00 GMT"
    })
}

pub fn snapshot_body(records: Vec<serde_json::Value>, total_users: i64) -> String {
    serde_json::json!({
        "hackathon_registration": records,
        "totalUsers": total_users
    })
    .to_string()
}

pub const TWO_MEMBERS: &str = r#"[{"name":"Asha","designation":"Lead","department":"CS","city":"Pune","state":"MH","mobile":"9999999999","email":"asha@example.com"},{"name":"Ravi","designation":"Developer","department":"IT","city":"Nashik","state":"MH","mobile":"8888888888","email":"ravi@example.com"}]"#;
