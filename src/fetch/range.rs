//! A single ranged request.

use crate::error::{Error, Result};
use crate::range::ByteRange;

use bytes::Bytes;
use reqwest::{header::RANGE, StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// Fetches `range` of `url` and returns the response body.
///
/// Only a `206 Partial Content` answer is accepted: any other status fails
/// with [`Error::UnsupportedPartialContent`], and a 206 with an empty body
/// fails with [`Error::EmptyRangeBody`].
pub async fn fetch_range(
    client: &ClientWithMiddleware,
    url: &Url,
    range: ByteRange,
) -> Result<Bytes> {
    let res = client
        .get(url.clone())
        .header(RANGE, range.header_value())
        .send()
        .await?;

    let status = res.status();
    if status != StatusCode::PARTIAL_CONTENT {
        return Err(Error::UnsupportedPartialContent(status));
    }

    let body = res.bytes().await?;
    if body.is_empty() {
        return Err(Error::EmptyRangeBody);
    }

    debug!("Downloaded sub-range {} ({} bytes)", range, body.len());
    Ok(body)
}
