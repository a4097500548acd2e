//! Tests for the fetch module: metadata probe, single ranged fetches and
//! the concurrent fetch group.

use partfetch::fetch::{fetch_all, fetch_all_with, fetch_range, resolve};
use partfetch::http::{create_http_client, HttpClientConfig};
use partfetch::range::{split, ByteRange};
use partfetch::Error;

use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use std::sync::atomic::Ordering;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

fn client() -> ClientWithMiddleware {
    create_http_client(HttpClientConfig::default()).expect("Failed to build client")
}

#[tokio::test]
async fn test_resolve_with_range_support() {
    let server = MockServer::start().await;
    mount_head(&server, 1024, true).await;

    let info = resolve(&client(), &file_url(&server)).await.unwrap();

    assert_eq!(info.length, 1024);
    assert!(info.supports_ranges);
}

#[tokio::test]
async fn test_resolve_without_accept_ranges() {
    let server = MockServer::start().await;
    mount_head(&server, 2048, false).await;

    let info = resolve(&client(), &file_url(&server)).await.unwrap();

    assert_eq!(info.length, 2048);
    assert!(!info.supports_ranges);
}

#[tokio::test]
async fn test_resolve_not_found() {
    let server = MockServer::start().await;

    let result = resolve(&client(), &file_url(&server)).await;

    assert!(matches!(result, Err(Error::MetadataUnavailable(_))));
}

#[tokio::test]
async fn test_fetch_range_returns_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .and(header("Range", "bytes=0-10"))
        .respond_with(ResponseTemplate::new(206).set_body_bytes(b"Hello Partial".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let range = ByteRange::new(0, 10).unwrap();
    let body = fetch_range(&client(), &file_url(&server), range).await.unwrap();

    // The payload is taken as sent, even when it does not match the range.
    assert_eq!(&body[..], b"Hello Partial");
}

#[tokio::test]
async fn test_fetch_range_rejects_full_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"Hello Full".to_vec()))
        .mount(&server)
        .await;

    let range = ByteRange::new(0, 10).unwrap();
    let result = fetch_range(&client(), &file_url(&server), range).await;

    match result {
        Err(Error::UnsupportedPartialContent(status)) => assert_eq!(status, StatusCode::OK),
        other => panic!("Expected UnsupportedPartialContent, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_range_rejects_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .respond_with(ResponseTemplate::new(206))
        .mount(&server)
        .await;

    let range = ByteRange::new(0, 10).unwrap();
    let result = fetch_range(&client(), &file_url(&server), range).await;

    assert!(matches!(result, Err(Error::EmptyRangeBody)));
}

#[tokio::test]
async fn test_fetch_range_server_error() {
    let content = create_test_content(100);
    let (_server, url, _) =
        start_server_with(RangeResponder::new(content).failing_at(50)).await;

    let result = fetch_range(&client(), &url, ByteRange::new(50, 99).unwrap()).await;

    match result {
        Err(Error::UnsupportedPartialContent(status)) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("Expected UnsupportedPartialContent, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_all_keeps_input_order() {
    let content = create_test_content(4000);
    let responder =
        RangeResponder::new(content.clone()).earlier_is_slower(Duration::from_millis(25));
    let (_server, url, requests) = start_server_with(responder).await;

    let ranges = split(4000, 8).unwrap();
    let mut completion_order = Vec::new();
    let results = fetch_all_with(&client(), &url, &ranges, |r| {
        completion_order.push(r.range.start())
    })
    .await
    .unwrap();

    assert_eq!(requests.load(Ordering::SeqCst), 8);
    assert_eq!(results.len(), ranges.len());
    for (result, range) in results.iter().zip(&ranges) {
        assert_eq!(result.range, *range);
        assert_eq!(
            &result.bytes[..],
            &content[range.start() as usize..=range.end() as usize]
        );
    }
    // The slowest range was the first one, yet it sits first in the results.
    assert_eq!(completion_order.len(), 8);
    assert_ne!(completion_order[0], 0);
}

#[tokio::test]
async fn test_fetch_all_runs_ranges_concurrently() {
    let content = create_test_content(800);
    let responder =
        RangeResponder::new(content).earlier_is_slower(Duration::from_millis(100));
    let (_server, url, _) = start_server_with(responder).await;
    let ranges = split(800, 4).unwrap();

    let started = std::time::Instant::now();
    fetch_all(&client(), &url, &ranges).await.unwrap();

    // Serially the delays add up to 2.0s; concurrently the slowest, 0.8s, dominates.
    assert!(started.elapsed() < Duration::from_millis(1800));
}

#[tokio::test]
async fn test_fetch_all_propagates_failure() {
    let content = create_test_content(1000);
    let (_server, url, _) =
        start_server_with(RangeResponder::new(content).failing_at(500)).await;
    let ranges = split(1000, 4).unwrap();

    let result = fetch_all(&client(), &url, &ranges).await;

    assert!(matches!(
        result,
        Err(Error::UnsupportedPartialContent(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
}

#[tokio::test]
async fn test_fetch_all_empty_input() {
    let server = MockServer::start().await;

    let results = fetch_all(&client(), &file_url(&server), &[]).await.unwrap();

    assert!(results.is_empty());
}
