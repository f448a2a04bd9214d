//! `HttpSource` against a local mock server.

use atomscope_client::{AtomSource, Error, HttpSource};
use atomscope_engine::HistoryWindow;
use atomscope_types::{FilterBound, FilterSpec, SyncMode, TrendingPeriod};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source(server: &MockServer) -> HttpSource {
    HttpSource::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_list_atoms_sends_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/atoms"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "atoms": [
                {"id": 1, "description": "Ethereum", "market_cap": "1500"},
                {"id": 2, "description": "Rust", "market_cap": 150}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let atoms = source(&server).list_atoms(20, None).await.unwrap();
    assert_eq!(atoms.len(), 2);
    assert_eq!(atoms[0].market_cap(), 1500.0);
}

#[tokio::test]
async fn test_trending_and_history_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/trending"))
        .and(query_param("period", "4h"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "trending": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/atoms/9/history"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"timestamp": "2024-06-01T00:00:00Z", "signal_value": "10", "share_price": 1.0}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = source(&server);
    assert!(source.trending(TrendingPeriod::H4, 50, None).await.unwrap().is_empty());
    let history = source.atom_history("9", HistoryWindow::Days(7)).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_forwarded_bounds_become_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/trending"))
        .and(query_param("period", "7d"))
        .and(query_param("limit", "10"))
        .and(query_param("min_market_cap", "100"))
        .and(query_param("max_share_price", "0.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "trending": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let spec = FilterSpec::new()
        .with_bound(FilterBound::MinMarketCap, "100")
        .with_bound(FilterBound::MaxSharePrice, "0.5");
    let atoms = source(&server)
        .trending(TrendingPeriod::D7, 10, Some(&spec))
        .await
        .unwrap();
    assert!(atoms.is_empty());
}

#[tokio::test]
async fn test_atom_id_is_a_single_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/atoms/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "atom": {"id": "a/b", "description": "Slashed"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let detail = source(&server).get_atom("a/b").await.unwrap();
    assert_eq!(detail.atom.label(), "Slashed");
}

#[tokio::test]
async fn test_error_status_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "error": "indexer offline" })),
        )
        .mount(&server)
        .await;

    let err = source(&server).search("eth", 20).await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 503, .. }));
    assert_eq!(err.user_message(), "server returned 503: indexer offline");
}

#[tokio::test]
async fn test_sync_failure_report_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/sync"))
        .and(body_json(json!({ "mode": "update", "limit": 100 })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": true,
            "error": "rpc timeout"
        })))
        .mount(&server)
        .await;

    let report = source(&server).sync(SyncMode::Update, Some(100)).await.unwrap();
    assert!(!report.success);
    assert_eq!(report.failure(), Some("rpc timeout"));
}

#[tokio::test]
async fn test_invalid_address_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "positions": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let err = source(&server).positions("0x123", 50, 0).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
