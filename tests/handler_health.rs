mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;

use snip::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _store) = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["storage"], "memory");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_is_not_a_short_id() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_health_is_public_with_api_key() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state.with_api_key(common::TEST_API_KEY));

    server.get("/health").await.assert_status_ok();
}
