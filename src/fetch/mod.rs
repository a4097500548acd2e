//! Network side of a download: the metadata probe, single ranged fetches,
//! and the concurrent fetch group that runs one task per sub-range.
//!
//! - [`info`] - `HEAD` probe producing a [`FileInfo`]
//! - [`range`] - one `Range: bytes=start-end` request
//! - [`group`] - fan-out/fan-in over a list of ranges

pub mod group;
pub mod info;
pub mod range;

pub use group::{fetch_all, fetch_all_with};
pub use info::{resolve, FileInfo};
pub use range::fetch_range;

use crate::range::ByteRange;
use bytes::Bytes;

/// A fetched sub-range: the range that was requested and the payload the
/// server sent for it.
///
/// The payload is never empty, but its length is taken as sent and may
/// differ from [`ByteRange::len`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The requested range.
    pub range: ByteRange,
    /// Raw body of the 206 response.
    pub bytes: Bytes,
}

impl FetchResult {
    /// Creates a new [`FetchResult`].
    pub fn new(range: ByteRange, bytes: Bytes) -> Self {
        Self { range, bytes }
    }

    /// Size of the payload in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
