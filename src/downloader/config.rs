//! Configuration structures and defaults for the downloader.
//!
//! # Examples
//!
//! ```rust
//! use partfetch::downloader::{PartCallback, StateCallback};
//!
//! let on_part: PartCallback = Box::new(|part| {
//!     println!("part {}/{} done ({} bytes)", part.number, part.total, part.bytes);
//! });
//! let on_state: StateCallback = Box::new(|state| println!("-> {}", state));
//! ```

use super::state::{PartProgress, State};
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::sync::Arc;

/// Default maximum size of a sequential part: 10 MiB.
pub const DEFAULT_PART_SIZE: u64 = 10 * 1024 * 1024;

/// Default number of concurrent sub-ranges per part.
pub const DEFAULT_CHUNKS_PER_PART: u32 = 4;

/// Callback type for state transitions.
pub type StateCallback = Box<dyn Fn(State) + Send + Sync>;

/// Callback type for completed parts.
pub type PartCallback = Box<dyn Fn(&PartProgress) + Send + Sync>;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded file.
    pub directory: std::path::PathBuf,
    /// Maximum number of bytes in one sequential part.
    pub part_size_bytes: u64,
    /// Number of sub-ranges, and so of concurrent requests, per part.
    pub chunks_per_part: u32,
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy for every request.
    pub proxy: Option<reqwest::Proxy>,
    /// Callback for each state transition.
    pub on_state: Option<Arc<StateCallback>>,
    /// Callback for each completed part.
    pub on_part_complete: Option<Arc<PartCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("part_size_bytes", &self.part_size_bytes)
            .field("chunks_per_part", &self.chunks_per_part)
            .field("style_options", &self.style_options)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("on_state", &self.on_state.is_some())
            .field("on_part_complete", &self.on_part_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            part_size_bytes: DEFAULT_PART_SIZE,
            chunks_per_part: DEFAULT_CHUNKS_PER_PART,
            style_options: StyleOptions::default(),
            headers: None,
            proxy: None,
            on_state: None,
            on_part_complete: None,
        }
    }
}
