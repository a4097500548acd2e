#![allow(dead_code)]

use partfetch::progress::{ProgressBarOpts, StyleOptions};
use partfetch::DownloaderBuilder;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

// Common test constants
pub const TEST_DOMAIN: &str = "http://domain.com/file.zip";
pub const TEST_USER_AGENT: &str = "partfetch-test-agent";
pub const TEST_PATH: &str = "/file.bin";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates random test content of the given size
pub fn create_test_content(size: usize) -> Vec<u8> {
    let mut content = vec![0u8; size];
    rand::rng().fill(&mut content[..]);
    content
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let actual = fs::read(path).expect("Failed to read downloaded file");
    assert_eq!(
        actual.len(),
        expected.len(),
        "File size mismatch at path: {:?}",
        path
    );
    assert!(actual == expected, "File content mismatch at path: {:?}", path);
}

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates test headers with custom user agent
pub fn create_test_headers_with_agent(agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(agent).expect("Invalid header value"),
    );
    headers
}

/// Creates a downloader builder with hidden progress bars writing to `dir`
pub fn create_test_downloader_builder(dir: &Path) -> DownloaderBuilder {
    DownloaderBuilder::hidden().directory(dir.to_path_buf())
}

/// Creates disabled style options for testing
pub fn create_disabled_style_options() -> StyleOptions {
    StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
}

/// Parses a `bytes=start-end` header value.
pub fn parse_range_header(value: &str) -> Option<(u64, u64)> {
    let (start, end) = value.strip_prefix("bytes=")?.split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// Serves byte ranges of a fixed content, like a static file server would.
pub struct RangeResponder {
    content: Vec<u8>,
    requests: Arc<AtomicUsize>,
    fail_at: Option<u64>,
    slower_earlier: Option<Duration>,
}

impl RangeResponder {
    pub fn new(content: Vec<u8>) -> Self {
        Self {
            content,
            requests: Arc::new(AtomicUsize::new(0)),
            fail_at: None,
            slower_earlier: None,
        }
    }

    /// Answer 500 to the range that starts at `offset`.
    pub fn failing_at(mut self, offset: u64) -> Self {
        self.fail_at = Some(offset);
        self
    }

    /// Delay responses so that ranges starting earlier finish later.
    pub fn earlier_is_slower(mut self, step: Duration) -> Self {
        self.slower_earlier = Some(step);
        self
    }

    /// Counter of the ranged requests served.
    pub fn requests(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.requests)
    }
}

impl Respond for RangeResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Some((start, end)) = request
            .headers
            .get("range")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_range_header)
        else {
            return ResponseTemplate::new(200).set_body_bytes(self.content.clone());
        };
        self.requests.fetch_add(1, Ordering::SeqCst);

        if self.fail_at == Some(start) {
            return ResponseTemplate::new(500).set_body_bytes(b"internal server error".to_vec());
        }

        let total = self.content.len() as u64;
        if start >= total || start > end {
            return ResponseTemplate::new(416);
        }
        let end = end.min(total - 1);
        let body = self.content[start as usize..=end as usize].to_vec();

        let mut response = ResponseTemplate::new(206)
            .insert_header("Content-Range", format!("bytes {}-{}/{}", start, end, total).as_str())
            .set_body_bytes(body);
        if let Some(step) = self.slower_earlier {
            let rank = (total - start) * 8 / total;
            response = response.set_delay(step * rank as u32);
        }
        response
    }
}

/// Mounts a `HEAD` answering with the content length and, optionally,
/// `Accept-Ranges: bytes`.
pub async fn mount_head(server: &MockServer, length: usize, accept_ranges: bool) {
    let mut template =
        ResponseTemplate::new(200).insert_header("Content-Length", length.to_string().as_str());
    if accept_ranges {
        template = template.insert_header("Accept-Ranges", "bytes");
    }
    Mock::given(method("HEAD"))
        .and(path(TEST_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Starts a server exposing `content` at [`TEST_PATH`] with range support.
///
/// Returns the server, the file URL and the counter of ranged requests.
pub async fn start_range_server(content: Vec<u8>) -> (MockServer, Url, Arc<AtomicUsize>) {
    start_server_with(RangeResponder::new(content)).await
}

/// Starts a range-capable server using a preconfigured responder.
pub async fn start_server_with(responder: RangeResponder) -> (MockServer, Url, Arc<AtomicUsize>) {
    let server = MockServer::start().await;
    mount_head(&server, responder.content.len(), true).await;

    let requests = responder.requests();
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .respond_with(responder)
        .mount(&server)
        .await;

    let url = file_url(&server);
    (server, url, requests)
}

/// URL of [`TEST_PATH`] on `server`.
pub fn file_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.uri(), TEST_PATH)).expect("Invalid mock server URL")
}
