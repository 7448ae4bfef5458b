use crate::dashboard::{DashboardHandler, load_asset};
use crate::stats::StatsSnapshot;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const LOG: &str = concat!(
    "{\"eventid\":\"cowrie.session.connect\",\"src_ip\":\"198.51.100.7\",\"timestamp\":\"2024-01-01T03:15:00Z\"}\n",
    "{\"eventid\":\"cowrie.login.failed\",\"username\":\"admin\",\"password\":\"admin\"}\n",
);

#[tokio::test]
async fn stats_route_returns_snapshot_json() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("cowrie.json");
    fs::write(&path, LOG).unwrap();
    let handler = DashboardHandler::new(path);

    // Act
    let resp = handler.respond(&Method::GET, "/api/stats").await;

    // Assert
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.content_type.as_deref(), Some("application/json"));
    let snapshot: StatsSnapshot = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(snapshot.summary.total_connections, 1);
    assert_eq!(snapshot.summary.failed_logins, 1);
    assert_eq!(snapshot.top_ips[0].ip, "198.51.100.7");
}

#[tokio::test]
async fn stats_route_rereads_the_log_each_request() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("cowrie.json");
    fs::write(&path, LOG).unwrap();
    let handler = DashboardHandler::new(path.clone());

    // Act
    let first = handler.respond(&Method::GET, "/api/stats").await;
    fs::write(&path, format!("{LOG}{LOG}")).unwrap();
    let second = handler.respond(&Method::GET, "/api/stats").await;

    // Assert
    let first: StatsSnapshot = serde_json::from_slice(&first.body).unwrap();
    let second: StatsSnapshot = serde_json::from_slice(&second.body).unwrap();
    assert_eq!(first.summary.total_connections, 1);
    assert_eq!(second.summary.total_connections, 2);
}

#[tokio::test]
async fn stats_route_with_missing_log_is_all_zero() {
    let dir = tempdir().unwrap();
    let handler = DashboardHandler::new(dir.path().join("missing.json"));

    let resp = handler.respond(&Method::GET, "/api/stats").await;

    assert_eq!(resp.status, StatusCode::OK);
    let snapshot: StatsSnapshot = serde_json::from_slice(&resp.body).unwrap();
    assert_eq!(snapshot, StatsSnapshot::default());
}

#[tokio::test]
async fn index_serves_embedded_page() {
    let handler = DashboardHandler::new("unused.json".into());

    let resp = handler.respond(&Method::GET, "/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert!(String::from_utf8_lossy(&resp.body).contains("/assets/dashboard.js"));
}

#[tokio::test]
async fn asset_route_serves_script_with_its_content_type() {
    let handler = DashboardHandler::new("unused.json".into());

    let resp = handler.respond(&Method::GET, "/assets/dashboard.js").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(
        resp.content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("javascript"))
    );
    assert!(String::from_utf8_lossy(&resp.body).contains("/api/stats"));
}

#[tokio::test]
async fn unknown_asset_and_path_are_not_found() {
    let handler = DashboardHandler::new("unused.json".into());

    let missing_asset = handler.respond(&Method::GET, "/assets/nope.png").await;
    let unknown = handler.respond(&Method::GET, "/wp-login.php").await;

    assert_eq!(missing_asset.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_slice(&unknown.body).unwrap();
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn non_get_methods_are_not_allowed() {
    let handler = DashboardHandler::new("unused.json".into());

    let resp = handler.respond(&Method::POST, "/api/stats").await;

    assert_eq!(resp.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.allow, Some("GET, HEAD"));
    assert!(resp.body.is_empty());
}

#[tokio::test]
async fn head_is_routed_like_get() {
    let handler = DashboardHandler::new("unused.json".into());

    let resp = handler.respond(&Method::HEAD, "/").await;

    assert_eq!(resp.status, StatusCode::OK);
}

#[test]
fn every_page_asset_is_embedded() {
    for name in ["index.html", "dashboard.js", "dashboard.css"] {
        assert!(load_asset(name).is_some(), "missing embedded asset {name}");
    }
}
