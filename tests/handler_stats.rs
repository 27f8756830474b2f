mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};

use snip::api::handlers::stats_handler;
use snip::domain::entities::Link;
use snip::domain::repositories::LinkStore;

#[tokio::test]
async fn test_stats_success() {
    let (state, store) = common::create_test_state();
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 45).unwrap();
    store
        .save(Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            5,
            created_at,
        ))
        .await
        .unwrap();

    let app = Router::new()
        .route("/stats/{id}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({
        "url": "https://example.com",
        "short": "abc123",
        "hits": 5,
        "createdAt": "2025-03-01T12:30:45Z",
    }));
}

#[tokio::test]
async fn test_stats_reflect_redirects() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let created = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let short = created["short"].as_str().unwrap();

    let before = server
        .get(&format!("/stats/{short}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(before["hits"], 0);

    server.get(&format!("/{short}")).await;
    server.get(&format!("/{short}")).await;

    let after = server
        .get(&format!("/stats/{short}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(after["hits"], 2);
    assert_eq!(after["url"], "https://example.com");
    assert_eq!(after["createdAt"], before["createdAt"]);

    let created_at = after["createdAt"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[tokio::test]
async fn test_stats_does_not_count_hits() {
    let (state, store) = common::create_test_state();
    store
        .save(Link::fresh("abc123", "https://example.com"))
        .await
        .unwrap();

    let server = common::create_test_server(state);

    for _ in 0..3 {
        server.get("/stats/abc123").await.assert_status_ok();
    }

    assert_eq!(store.get("abc123").await.unwrap().hits, 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/stats/nonexistent").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}
