//! File metadata probe.

use crate::error::{Error, Result};

use reqwest::{
    header::{HeaderMap, ACCEPT_RANGES, CONTENT_LENGTH},
    Url,
};
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// What the server told us about the remote file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    /// Total size of the resource in bytes.
    pub length: u64,
    /// Whether the server advertised `Accept-Ranges: bytes`.
    pub supports_ranges: bool,
}

impl FileInfo {
    /// Reads the length and range support out of a set of response headers.
    ///
    /// Fails with [`Error::MetadataUnavailable`] if `Content-Length` is
    /// missing or is not a decimal integer. A missing or different
    /// `Accept-Ranges` only clears `supports_ranges`.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        let raw = headers.get(CONTENT_LENGTH).ok_or_else(|| {
            Error::MetadataUnavailable("the response has no Content-Length header".into())
        })?;
        let length = raw
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .ok_or_else(|| {
                Error::MetadataUnavailable(format!("invalid Content-Length header: {:?}", raw))
            })?;

        let supports_ranges = headers
            .get(ACCEPT_RANGES)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("bytes"));

        Ok(Self {
            length,
            supports_ranges,
        })
    }
}

/// Learns the size of `url` and whether it can be fetched by ranges, using a
/// single `HEAD` request.
///
/// An unsuccessful status is reported as [`Error::MetadataUnavailable`]
/// since its headers describe an error page, not the file.
pub async fn resolve(client: &ClientWithMiddleware, url: &Url) -> Result<FileInfo> {
    debug!("Probing {}", url);
    let res = client.head(url.clone()).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::MetadataUnavailable(format!(
            "HEAD {} returned {}",
            url, status
        )));
    }

    let info = FileInfo::from_headers(res.headers())?;
    debug!(
        length = info.length,
        supports_ranges = info.supports_ranges,
        "Resolved file info"
    );
    Ok(info)
}
