//! Integration Tests for API Endpoints
//!
//! Drives the router through full request/response cycles while AI
//! operation results are cached through the shared state.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use ai_response_cache::cache::{chat_key, diagnosis_key, CacheStore};
use ai_response_cache::config::{CacheConfig, TtlConfig};
use ai_response_cache::{api::create_router, AppState, OperationType};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn test_config(max_size: usize) -> CacheConfig {
    CacheConfig {
        enabled: true,
        max_size,
        ttl_seconds: TtlConfig::default(),
    }
}

fn create_test_app() -> (AppState, Router) {
    let state = AppState::new(CacheStore::new(test_config(100)));
    let app = create_router(state.clone());
    (state, app)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_stats(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/cache/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_empty() {
    let (_, app) = create_test_app();

    let json = get_stats(&app).await;

    assert_eq!(json["success"], true);
    let stats = &json["data"]["stats"];
    assert_eq!(stats["size"], 0);
    assert_eq!(stats["maxSize"], 100);
    assert_eq!(stats["hits"], 0);
    assert_eq!(stats["misses"], 0);
    assert_eq!(stats["hitRate"], 0.0);
    assert_eq!(stats["averageAgeSeconds"], 0.0);
    assert_eq!(stats["memoryEstimateBytes"], 0);

    let config = &json["data"]["config"];
    assert_eq!(config["enabled"], true);
    assert_eq!(config["ttlSeconds"]["chat"], 600);
    assert_eq!(config["ttlSeconds"]["diagnosis"], 3600);
    assert_eq!(config["ttlSeconds"]["planning"], 1800);
    assert_eq!(config["ttlSeconds"]["default"], 900);
}

#[tokio::test]
async fn test_stats_endpoint_after_ai_traffic() {
    let (state, app) = create_test_app();

    // What an AI chat handler does: fingerprint, look up, compute on miss
    let key = chat_key("When should I sow wheat?", Some("wheat"), "en");
    {
        let mut cache = state.cache.write().await;
        let first: Result<Value, String> =
            cache.get_or_insert_with(&key, OperationType::Chat, || {
                Ok(json!({"reply": "Early November"}))
            });
        assert!(first.is_ok());

        // Same question, different formatting
        let same = chat_key("  when should I SOW wheat? ", Some("Wheat"), "EN");
        assert_eq!(cache.get(&same), Some(json!({"reply": "Early November"})));

        let diag = diagnosis_key("tomato", &["leaf curl"], None);
        cache.set(diag, json!({"disease": "TYLCV"}), OperationType::Diagnosis);
    }

    let json = get_stats(&app).await;
    let stats = &json["data"]["stats"];

    assert_eq!(stats["size"], 2);
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["hitRate"], 50.0);
    assert_eq!(stats["byType"]["chat"], 1);
    assert_eq!(stats["byType"]["diagnosis"], 1);
    assert_eq!(stats["byType"]["planning"], 0);
    assert!(stats["memoryEstimateBytes"].as_u64().unwrap() > 0);
}

// == Clear Endpoint Tests ==

#[tokio::test]
async fn test_clear_endpoint() {
    let (state, app) = create_test_app();
    {
        let mut cache = state.cache.write().await;
        cache.set("a", json!(1), OperationType::Chat);
        cache.set("b", json!(2), OperationType::Planning);
        cache.set("c", json!(3), OperationType::General);
        cache.get("a");
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Cache cleared: 3 entries removed");
    assert_eq!(json["previousStats"]["size"], 3);
    assert_eq!(json["previousStats"]["hitRate"], 100.0);

    let after = get_stats(&app).await;
    assert_eq!(after["data"]["stats"]["size"], 0);
    // Counters are cumulative across clears
    assert_eq!(after["data"]["stats"]["hits"], 1);
}

#[tokio::test]
async fn test_clear_endpoint_empty_cache() {
    let (_, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["message"], "Cache cleared: 0 entries removed");
    assert_eq!(json["previousStats"]["hitRate"], 0.0);
}

// == Capacity Through Shared State ==

#[tokio::test]
async fn test_capacity_reported_after_eviction() {
    let state = AppState::new(CacheStore::new(test_config(2)));
    let app = create_router(state.clone());

    {
        let mut cache = state.cache.write().await;
        cache.set("A", json!("a"), OperationType::Chat);
        cache.set("B", json!("b"), OperationType::Chat);
        cache.set("C", json!("c"), OperationType::Chat);
        assert!(cache.get("A").is_none());
        assert!(cache.get("B").is_some());
        assert!(cache.get("C").is_some());
    }

    let json = get_stats(&app).await;
    assert_eq!(json["data"]["stats"]["size"], 2);
    assert_eq!(json["data"]["stats"]["maxSize"], 2);
    assert_eq!(json["data"]["stats"]["evictions"], 1);
}

// == Disabled Cache ==

#[tokio::test]
async fn test_disabled_cache_reports_config() {
    let mut config = test_config(100);
    config.enabled = false;
    let state = AppState::new(CacheStore::new(config));
    let app = create_router(state.clone());

    {
        let mut cache = state.cache.write().await;
        cache.set("k", json!("v"), OperationType::Chat);
        assert!(cache.get("k").is_none());
    }

    let json = get_stats(&app).await;
    assert_eq!(json["data"]["config"]["enabled"], false);
    assert_eq!(json["data"]["stats"]["size"], 0);
    assert_eq!(json["data"]["stats"]["misses"], 0);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (_, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Error Handling Tests ==

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (_, app) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("/api/posts"));
}
