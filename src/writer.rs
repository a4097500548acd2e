//! Writing a fetched part into the output file.
//!
//! Sub-ranges of a part are contiguous, so chunk `i` belongs at the part's
//! base offset plus the sizes of the sub-ranges before it. Each chunk is
//! written with a seek to that offset followed by `write_all`, which makes
//! the order parts are written in irrelevant.

use crate::error::{Error, Result};
use crate::fetch::FetchResult;

use std::io::SeekFrom;
use tokio::io::{AsyncSeek, AsyncSeekExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Writes the chunks of one part starting at `base_offset`.
///
/// `results` must be the index-aligned output of
/// [`fetch_all`](crate::fetch::fetch_all) for sub-ranges starting at
/// `base_offset`; a chunk whose range does not start where the previous one
/// ended fails with [`Error::InvalidArgument`] before anything else is
/// written over it.
///
/// Returns the number of payload bytes written.
pub async fn write_part<W>(output: &mut W, base_offset: u64, results: &[FetchResult]) -> Result<u64>
where
    W: AsyncWrite + AsyncSeek + Unpin,
{
    let mut offset = base_offset;
    let mut written = 0u64;

    for result in results {
        if result.range.start() != offset {
            return Err(Error::InvalidArgument(format!(
                "sub-range {} does not start at offset {}",
                result.range, offset
            )));
        }
        if result.size() != result.range.len() {
            warn!(
                "Sub-range {} returned {} bytes instead of {}",
                result.range,
                result.size(),
                result.range.len()
            );
        }

        output.seek(SeekFrom::Start(offset)).await?;
        output.write_all(&result.bytes).await?;

        written += result.size();
        offset += result.range.len();
    }

    output.flush().await?;
    debug!("Wrote {} bytes at offset {}", written, base_offset);
    Ok(written)
}
