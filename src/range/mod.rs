//! Byte ranges and range planning.
//!
//! A download is described by inclusive byte ranges: the file is cut into
//! sequential parts, and each part is cut again into sub-ranges that are
//! fetched concurrently.
//!
//! # Examples
//!
//! ```rust
//! use partfetch::range::{split, ByteRange};
//!
//! let ranges = split(11, 3)?;
//! assert_eq!(
//!     ranges,
//!     vec![
//!         ByteRange::new(0, 2)?,
//!         ByteRange::new(3, 5)?,
//!         ByteRange::new(6, 10)?,
//!     ]
//! );
//! assert_eq!(ranges[2].header_value(), "bytes=6-10");
//! # Ok::<(), partfetch::Error>(())
//! ```

pub mod planner;

pub use planner::{part_count, split};

use crate::error::{Error, Result};
use std::fmt;

/// An inclusive `[start, end]` span of byte offsets within a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteRange {
    start: u64,
    end: u64,
}

impl ByteRange {
    /// Creates a new [`ByteRange`].
    ///
    /// Fails with [`Error::InvalidArgument`] if `start > end`.
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "range start {} is past its end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// First byte offset of the range.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last byte offset of the range, inclusive.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of bytes covered by the range. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Moves the range forward by `offset` bytes.
    pub fn shift(self, offset: u64) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Value of the `Range` request header for this span: `bytes=start-end`.
    pub fn header_value(&self) -> String {
        format!("bytes={}", self)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
