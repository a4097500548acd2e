//! Core downloader implementation.
//!
//! The [`Downloader`] probes the remote file once, then walks it in
//! sequential parts of at most `part_size_bytes`. Each part is split into
//! `chunks_per_part` sub-ranges that are fetched concurrently and written
//! at their offsets before the next part starts.
//!
//! ```rust,no_run
//! use partfetch::downloader::DownloaderBuilder;
//! use partfetch::download::Download;
//! use std::convert::TryFrom;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new()
//!     .part_size_bytes(10 * 1024 * 1024)
//!     .chunks_per_part(4)
//!     .build();
//! let download = Download::try_from("https://example.com/big.iso")?;
//!
//! match downloader.download(&download).await {
//!     Ok(summary) => println!("{} bytes in {} parts", summary.size(), summary.parts()),
//!     Err(e) => eprintln!("download failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use super::state::{PartProgress, State};
use crate::download::{Download, Summary};
use crate::error::{Error, Result};
use crate::fetch::{fetch_all_with, resolve, FileInfo};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::ProgressDisplay;
use crate::range::{part_count, split, ByteRange};
use crate::writer::write_part;

use indicatif::ProgressBar;
use reqwest::{header::HeaderMap, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tracing::{debug, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use partfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where the file will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the maximum size of a part.
    pub fn part_size_bytes(&self) -> u64 {
        self.config.part_size_bytes
    }

    /// Gets the number of concurrent sub-ranges per part.
    pub fn chunks_per_part(&self) -> u32 {
        self.config.chunks_per_part
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Downloads `download` into the configured directory.
    ///
    /// Returns a [`Summary`] once every part has been written. Any error
    /// aborts the download; parts already written stay on disk, and the
    /// output file must then be considered invalid.
    pub async fn download(&self, download: &Download) -> Result<Summary> {
        let output = self.config.directory.join(&download.filename);
        self.download_to(&download.url, &output)
            .await
            .map(|(size, parts)| Summary::new(download.clone(), output, size, parts))
    }

    /// Downloads `url` to `path`, ignoring the configured directory.
    ///
    /// Returns the size of the file on disk and the number of parts fetched.
    /// The size only differs from the announced `Content-Length` when the
    /// server sent range bodies of the wrong length.
    pub async fn download_to(&self, url: &Url, path: &Path) -> Result<(u64, u64)> {
        self.enter(State::Init);
        match self.run(url, path).await {
            Ok(done) => {
                self.enter(State::Done);
                Ok(done)
            }
            Err(e) => {
                warn!("Download of {} failed: {}", url, e);
                self.enter(State::Failed);
                Err(e)
            }
        }
    }

    async fn run(&self, url: &Url, path: &Path) -> Result<(u64, u64)> {
        self.validate_config()?;
        let client = create_http_client(HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        })?;

        self.enter(State::ResolvingInfo);
        let info = resolve(&client, url).await?;

        self.enter(State::Validating);
        Self::validate_info(&info)?;
        debug!("Total file size: {} bytes", info.length);

        self.enter(State::DownloadingParts);
        let mut file = Self::create_output(path).await?;

        let part_size = self.config.part_size_bytes;
        let total_parts = part_count(info.length, part_size);
        let progress = ProgressDisplay::new(self.config.style_options.clone(), total_parts);

        let mut start_byte = 0u64;
        let mut number = 1u64;
        while start_byte < info.length {
            let size = part_size.min(info.length - start_byte);
            let window = ByteRange::new(start_byte, start_byte + size - 1)?;
            debug!("Downloading part {}/{} (bytes {})", number, total_parts, window);

            let pb = progress.create_child_progress(size);
            let written = match self.download_part(&client, url, &mut file, window, &pb).await {
                Ok(written) => written,
                Err(e) => {
                    pb.abandon();
                    progress.abandon();
                    return Err(e);
                }
            };
            progress.finish_child(pb);
            progress.increment_main();

            if let Some(ref callback) = self.config.on_part_complete {
                callback(&PartProgress {
                    number,
                    total: total_parts,
                    range: window,
                    bytes: written,
                });
            }

            start_byte += size;
            number += 1;
        }

        progress.finish();

        // Bodies are written as sent, so the file ends where the data did.
        let size = file.metadata().await?.len();
        if size != info.length {
            warn!(
                "{:?} is {} bytes, the server announced {}",
                path, size, info.length
            );
        }
        debug!("File successfully downloaded to {:?}", path);
        Ok((size, number - 1))
    }

    /// Fetches the sub-ranges of `window` concurrently and writes them.
    async fn download_part(
        &self,
        client: &ClientWithMiddleware,
        url: &Url,
        file: &mut File,
        window: ByteRange,
        pb: &ProgressBar,
    ) -> Result<u64> {
        // A part smaller than the chunk count gets one byte per sub-range.
        let chunks = u64::from(self.config.chunks_per_part).min(window.len()) as u32;
        let sub_ranges: Vec<ByteRange> = split(window.len(), chunks)?
            .into_iter()
            .map(|r| r.shift(window.start()))
            .collect();

        let results = fetch_all_with(client, url, &sub_ranges, |r| pb.inc(r.size())).await?;
        write_part(file, window.start(), &results).await
    }

    fn validate_config(&self) -> Result<()> {
        if self.config.part_size_bytes == 0 {
            return Err(Error::InvalidArgument(
                "part size must be greater than zero".into(),
            ));
        }
        if self.config.chunks_per_part == 0 {
            return Err(Error::InvalidArgument(
                "chunks per part must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    fn validate_info(info: &FileInfo) -> Result<()> {
        if info.length == 0 {
            return Err(Error::MetadataUnavailable(
                "the server reported an empty file".into(),
            ));
        }
        if !info.supports_ranges {
            return Err(Error::RangeUnsupported);
        }
        Ok(())
    }

    /// Creates or truncates the output file, and its directory.
    async fn create_output(path: &Path) -> Result<File> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Creating destination directory {:?}", dir);
            fs::create_dir_all(dir).await?;
        }

        debug!("Creating destination file {:?}", path);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .await?;
        Ok(file)
    }

    fn enter(&self, state: State) {
        debug!(%state, "Download state changed");
        if let Some(ref callback) = self.config.on_state {
            callback(state);
        }
    }
}
