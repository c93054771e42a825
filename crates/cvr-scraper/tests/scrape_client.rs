//! Integration tests for `ScrapeClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy paths for both endpoints and
//! every error variant the client can produce.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cvr_core::Platform;
use cvr_scraper::{ScrapeClient, ScrapeConfig, ScrapeError};

const PROFILE_URL: &str = "https://www.instagram.com/natgeo";

/// Builds a `ScrapeClient` against the mock server: 5-second timeout,
/// descriptive UA, fixed test key.
fn test_client(server: &MockServer) -> ScrapeClient {
    ScrapeClient::new(ScrapeConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
        user_agent: "cvr-test/0.1".to_string(),
    })
    .expect("failed to build test ScrapeClient")
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_profile_returns_payload_verbatim() {
    let server = MockServer::start().await;
    let payload = json!({"user": {"username": "natgeo", "follower_count": 280_000_000}});

    Mock::given(method("GET"))
        .and(path("/v1/instagram/profile"))
        .and(query_param("url", PROFILE_URL))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client.fetch_profile(Platform::Instagram, PROFILE_URL).await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert_eq!(result.unwrap(), payload);
}

#[tokio::test]
async fn fetch_posts_passes_count_and_preserves_envelope_shape() {
    let server = MockServer::start().await;
    // The client must not interpret the envelope; edges stay edges.
    let payload = json!({"data": {"edges": [{"node": {"id": "a"}}]}});

    Mock::given(method("GET"))
        .and(path("/v1/tiktok/posts"))
        .and(query_param("url", "https://tiktok.com/@x"))
        .and(query_param("count", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = client
        .fetch_posts(Platform::TikTok, "https://tiktok.com/@x", 30)
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert_eq!(result.unwrap(), payload);
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instagram/profile"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_profile(Platform::Instagram, PROFILE_URL)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScrapeError::NotFound { ref url } if url.contains("/v1/instagram/profile")),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn rate_limit_reads_retry_after_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instagram/posts"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "120"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_posts(Platform::Instagram, PROFILE_URL, 30)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScrapeError::RateLimited { retry_after_secs: 120 }),
        "expected RateLimited(120), got: {err:?}"
    );
}

#[tokio::test]
async fn rate_limit_defaults_retry_after_when_header_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instagram/posts"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_posts(Platform::Instagram, PROFILE_URL, 30)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScrapeError::RateLimited { retry_after_secs: 60 }),
        "expected RateLimited(60), got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_maps_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/youtube/profile"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_profile(Platform::YouTube, "https://youtube.com/@mkbhd")
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScrapeError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn invalid_json_body_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/instagram/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .fetch_profile(Platform::Instagram, PROFILE_URL)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScrapeError::Deserialize { ref context, .. } if context == "instagram profile"),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn connection_failure_maps_to_http_error() {
    // Grab a free port, then shut the server down so the connection refuses.
    let server = MockServer::start().await;
    let client = test_client(&server);
    drop(server);

    let err = client
        .fetch_profile(Platform::Instagram, PROFILE_URL)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ScrapeError::Http(_)),
        "expected Http, got: {err:?}"
    );
}
