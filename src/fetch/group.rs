//! Concurrent fetching of the sub-ranges of one part.
//!
//! Each range gets its own tokio task. All tasks start together and the
//! group waits for every one of them before returning, so the caller sees a
//! single barrier per part. Results are put back in the order of the input
//! ranges whatever order the tasks finish in.
//!
//! The first failing task fails the whole group. Dropping the [`JoinSet`]
//! aborts the tasks still in flight, and whatever they fetched is thrown
//! away.

use super::{fetch_range, FetchResult};
use crate::error::{Error, Result};
use crate::range::ByteRange;

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tokio::task::JoinSet;
use tracing::debug;

/// Fetches every range of `ranges` concurrently.
///
/// `result[i]` always holds the payload of `ranges[i]`.
pub async fn fetch_all(
    client: &ClientWithMiddleware,
    url: &Url,
    ranges: &[ByteRange],
) -> Result<Vec<FetchResult>> {
    fetch_all_with(client, url, ranges, |_| {}).await
}

/// Same as [`fetch_all`], calling `on_fetched` as each range completes.
///
/// The callback runs on the caller's task, in completion order.
pub async fn fetch_all_with<F>(
    client: &ClientWithMiddleware,
    url: &Url,
    ranges: &[ByteRange],
    mut on_fetched: F,
) -> Result<Vec<FetchResult>>
where
    F: FnMut(&FetchResult),
{
    let mut tasks: JoinSet<Result<(usize, FetchResult)>> = JoinSet::new();
    for (index, range) in ranges.iter().copied().enumerate() {
        let client = client.clone();
        let url = url.clone();
        tasks.spawn(async move {
            let bytes = fetch_range(&client, &url, range).await?;
            Ok((index, FetchResult::new(range, bytes)))
        });
    }

    let mut slots: Vec<Option<FetchResult>> = (0..ranges.len()).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = match joined {
            Ok(Ok(done)) => done,
            Ok(Err(e)) => {
                debug!("Sub-range fetch failed, dropping {} pending", tasks.len());
                return Err(e);
            }
            Err(e) => {
                return Err(Error::Internal(format!("fetch task did not complete: {}", e)));
            }
        };
        on_fetched(&result);
        slots[index] = Some(result);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| Error::Internal(format!("sub-range {} produced no result", index)))
        })
        .collect()
}
