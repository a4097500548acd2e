//! HTTP client setup and middleware configuration.
//!
//! Every request partfetch issues, the metadata probe and each ranged
//! fetch, goes through the [`ClientWithMiddleware`] built here. The stack
//! only traces requests. There is no retry layer: a failed
//! range fails its part.
//!
//! # Examples
//!
//! ```rust
//! use partfetch::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "partfetch/0.1".parse()?);
//!
//! let client = create_http_client(HttpClientConfig {
//!     proxy: None,
//!     headers: Some(headers),
//! })?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

/// Creates an HTTP client with tracing middleware.
///
/// The proxy and default headers from `config` are applied to the inner
/// reqwest client.
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder();

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
