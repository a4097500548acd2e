//! Error handling for partfetch.
//!
//! Every failure is fatal to the download it occurs in: nothing here is
//! retried or recovered locally, errors are propagated with `?` up to the
//! caller of [`Downloader::download`](crate::Downloader::download).

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Errors that can happen while downloading a file in parts.
#[derive(Error, Debug)]
pub enum Error {
    /// A planner input or a configuration value is out of range.
    ///
    /// Returned for zero lengths, zero counts, or a zero part size.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The metadata probe did not yield a usable length.
    ///
    /// The `Content-Length` header was missing, not a decimal integer, or zero.
    #[error("File metadata unavailable: {0}")]
    MetadataUnavailable(String),

    /// The server does not advertise `Accept-Ranges: bytes`.
    ///
    /// There is no serial fallback, the download stops here.
    #[error("Server does not support partial downloads")]
    RangeUnsupported,

    /// A ranged request was answered with something other than 206.
    #[error("Server does not support partial content. Code: {0}")]
    UnsupportedPartialContent(StatusCode),

    /// A 206 response arrived without a body.
    #[error("Empty response for range request")]
    EmptyRangeBody,

    /// The download target URL cannot be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Creating, seeking or writing the output file failed.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the middleware stack wrapping the HTTP client.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// A fetch task could not be joined (it panicked or was cancelled).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for operations that can fail with a partfetch error.
pub type Result<T> = std::result::Result<T, Error>;
