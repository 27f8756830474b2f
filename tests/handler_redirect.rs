mod common;

use axum::http::{StatusCode, header};
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;

use snip::api::handlers::redirect_handler;
use snip::domain::entities::Link;
use snip::domain::repositories::LinkStore;
use snip::utils::code_generator::{CodeGenerator, GeneratorKind};

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    store
        .save(Link::fresh("abc123", "https://example.com/target"))
        .await
        .unwrap();

    let app = Router::new()
        .route("/{id}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_counts_hits() {
    let (state, store) = common::create_test_state();
    store
        .save(Link::fresh("abc123", "https://example.com"))
        .await
        .unwrap();

    let server = common::create_test_server(state);

    for _ in 0..3 {
        server.get("/abc123").await.assert_status(StatusCode::FOUND);
    }

    assert_eq!(store.get("abc123").await.unwrap().hits, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["short"], "nonexistent");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_redirect_returns_url_unmodified() {
    let (state, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let url = "https://Example.com:8443/a/b?q=1&r=two#frag";
    let created = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": url }))
        .await
        .json::<serde_json::Value>();
    let short = created["short"].as_str().unwrap();

    let response = server.get(&format!("/{short}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), url);
}

#[tokio::test]
async fn test_redirect_with_hash_generator_is_deterministic_per_input() {
    let generator: Arc<dyn CodeGenerator> = GeneratorKind::Hash.build(8).unwrap();
    let (state, _store) = common::create_test_state_with(Arc::clone(&generator));
    let server = common::create_test_server(state);

    let first = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    // The second create collides on the raw input and succeeds on the retry input.
    assert_eq!(first["short"], generator.next("https://example.com").unwrap());
    assert_eq!(
        second["short"],
        generator.next("https://example.com#1").unwrap()
    );

    for body in [first, second] {
        let short = body["short"].as_str().unwrap();
        let response = server.get(&format!("/{short}")).await;
        assert_eq!(response.header(header::LOCATION), "https://example.com");
    }
}
