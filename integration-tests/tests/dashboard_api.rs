use integration_tests::harness::TestServer;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use reqwest::header::{ALLOW, CONTENT_TYPE};
use serde_json::Value;

const LOG: &str = concat!(
    r#"{"eventid":"cowrie.session.connect","src_ip":"203.0.113.9","timestamp":"2024-03-01T10:05:00.000000Z"}"#,
    "\n",
    r#"{"eventid":"cowrie.login.failed","src_ip":"203.0.113.9","username":"root","password":"123456","timestamp":"2024-03-01T10:05:01.000000Z"}"#,
    "\n",
    r#"{"eventid":"cowrie.login.success","src_ip":"203.0.113.9","username":"root","password":"toor","timestamp":"2024-03-01T10:05:02.000000Z"}"#,
    "\n",
    r#"{"eventid":"cowrie.command.input","src_ip":"203.0.113.9","input":"uname -a","timestamp":"2024-03-01T11:00:00.000000Z"}"#,
    "\n",
    "not json at all\n",
    r#"{"eventid":"cowrie.session.closed","src_ip":"203.0.113.9","duration":"4.5","timestamp":"2024-03-01T11:00:05.000000Z"}"#,
    "\n",
);

fn stats(srv: &TestServer) -> Value {
    let res = srv.get("/api/stats").send().unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    res.json().unwrap()
}

#[test]
fn stats_endpoint_reports_log_contents() {
    // Arrange
    let srv = TestServer::start("basic", Some(LOG));

    // Act
    let body = stats(&srv);

    // Assert
    let summary = &body["summary"];
    assert_eq!(summary["total_connections"], 1);
    assert_eq!(summary["total_login_attempts"], 2);
    assert_eq!(summary["successful_logins"], 1);
    assert_eq!(summary["failed_logins"], 1);
    assert_eq!(summary["unique_passwords"], 2);
    assert_eq!(summary["total_commands"], 1);
    assert_eq!(summary["avg_session_duration"], 4.5);

    assert_eq!(
        body["top_usernames"],
        serde_json::json!([{ "name": "root", "count": 2 }])
    );
    assert_eq!(
        body["top_ips"],
        serde_json::json!([{ "ip": "203.0.113.9", "count": 1 }])
    );
    assert_eq!(
        body["timeline"],
        serde_json::json!([
            { "time": "2024-03-01T10", "count": 2 },
            { "time": "2024-03-01T11", "count": 1 },
        ])
    );
}

#[test]
fn stats_follow_the_growing_log() {
    // Arrange
    let srv = TestServer::start("basic", Some(LOG));
    let before = stats(&srv);

    // Act
    srv.append_log(concat!(
        r#"{"eventid":"cowrie.session.connect","src_ip":"198.51.100.7"}"#,
        "\n"
    ));
    let after = stats(&srv);

    // Assert
    assert_eq!(before["summary"]["total_connections"], 1);
    assert_eq!(after["summary"]["total_connections"], 2);
    assert_eq!(after["summary"]["unique_ips"], 2);
}

#[test]
fn missing_log_serves_empty_stats() {
    // Arrange
    let srv = TestServer::start("basic", None);

    // Act
    let body = stats(&srv);

    // Assert
    assert_eq!(body["summary"]["total_connections"], 0);
    assert_eq!(body["summary"]["avg_session_duration"], 0.0);
    assert_eq!(body["top_commands"], serde_json::json!([]));
    assert_eq!(body["timeline"], serde_json::json!([]));
}

#[test]
fn index_page_is_served() {
    let srv = TestServer::start("basic", None);

    let res = srv.get("/").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()
            .get(CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    let body = res.text().unwrap();
    assert!(body.contains("/assets/dashboard.js"));
}

#[test]
fn dashboard_assets_are_served() {
    let srv = TestServer::start("basic", None);

    let res = srv.get("/assets/dashboard.js").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().unwrap().contains("/api/stats"));
}

#[test]
fn unknown_path_is_json_404() {
    let srv = TestServer::start("basic", None);

    let res = srv.get("/wp-login.php").send().unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().unwrap();
    assert_eq!(body, serde_json::json!({ "error": "not found" }));
}

#[test]
fn post_is_rejected_with_allow_header() {
    let srv = TestServer::start("basic", Some(LOG));

    let res = srv.post("/api/stats").body("{}").send().unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers().get(ALLOW).unwrap(), "GET, HEAD");
}

#[test]
fn head_returns_headers_only() {
    let srv = TestServer::start("basic", Some(LOG));

    let res = srv.head("/api/stats").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(res.bytes().unwrap().len(), 0);
}
