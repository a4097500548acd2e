//! Splitting a byte length into contiguous ranges.

use super::ByteRange;
use crate::error::{Error, Result};

/// Splits `[0, total_length)` into `count` contiguous inclusive ranges.
///
/// Every range has `total_length / count` bytes except the last one, which
/// also absorbs the whole remainder. Remainder bytes are never spread over
/// the other ranges, so the boundaries sent on the wire are stable.
///
/// Fails with [`Error::InvalidArgument`] if `total_length` or `count` is
/// zero, or if `count` exceeds `total_length` (that would need empty
/// ranges).
///
/// ```rust
/// use partfetch::range::split;
///
/// let ranges = split(100, 4)?;
/// let bounds: Vec<_> = ranges.iter().map(|r| (r.start(), r.end())).collect();
/// assert_eq!(bounds, vec![(0, 24), (25, 49), (50, 74), (75, 99)]);
/// # Ok::<(), partfetch::Error>(())
/// ```
pub fn split(total_length: u64, count: u32) -> Result<Vec<ByteRange>> {
    if count == 0 {
        return Err(Error::InvalidArgument(
            "range count must be greater than zero".into(),
        ));
    }
    if total_length == 0 {
        return Err(Error::InvalidArgument(
            "content length must be greater than zero".into(),
        ));
    }
    let count = u64::from(count);
    if count > total_length {
        return Err(Error::InvalidArgument(format!(
            "cannot split {} bytes into {} non-empty ranges",
            total_length, count
        )));
    }

    let base = total_length / count;
    let remainder = total_length % count;

    let mut ranges = Vec::with_capacity(count as usize);
    let mut start = 0u64;
    for index in 0..count {
        let mut end = start + base - 1;
        if index == count - 1 {
            end += remainder;
        }
        ranges.push(ByteRange { start, end });
        start = end + 1;
    }

    Ok(ranges)
}

/// Number of sequential parts needed to cover `length` bytes with parts of
/// at most `part_size` bytes. Rounds up.
///
/// Returns 0 when `part_size` is 0.
pub fn part_count(length: u64, part_size: u64) -> u64 {
    if part_size == 0 {
        return 0;
    }
    length.div_ceil(part_size)
}
