//! partfetch downloads a single file over HTTP(S) with concurrent
//! byte-range requests.
//!
//! The file is walked in sequential parts. Each part is cut into
//! sub-ranges that are fetched at the same time, one task per sub-range,
//! then written at their offsets in the output file before the next part
//! starts. The server must answer a `HEAD` with `Content-Length` and
//! `Accept-Ranges: bytes`, and every ranged `GET` with `206 Partial
//! Content`; anything else fails the download. There is no retry and no
//! serial fallback.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use partfetch::{Download, DownloaderBuilder, Error};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let download = Download::try_from("https://example.com/files/dataset.tar")?;
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("output"))
//!     .part_size_bytes(10 * 1024 * 1024)
//!     .chunks_per_part(4)
//!     .build();
//! let summary = downloader.download(&download).await?;
//! println!("saved {} bytes to {:?}", summary.size(), summary.path());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`range`] - [`ByteRange`] and the range planner
//! - [`fetch`] - metadata probe, ranged fetch and the concurrent fetch group
//! - [`writer`] - positioned writes of a fetched part
//! - [`downloader`] - the [`Downloader`] orchestrator and its builder
//! - [`download`] - download targets and summaries
//! - [`error`] - the [`Error`] enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - progress bar styling and display

pub mod download;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod http;
pub mod progress;
pub mod range;
pub mod writer;

pub use download::{Download, Summary};
pub use downloader::{Downloader, DownloaderBuilder, PartProgress, State};
pub use error::{Error, Result};
pub use fetch::{fetch_all, fetch_range, resolve, FetchResult, FileInfo};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use range::{split, ByteRange};
pub use writer::write_part;
