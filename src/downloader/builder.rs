//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ```rust
//! use partfetch::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .part_size_bytes(5 * 1024 * 1024)
//!     .chunks_per_part(8)
//!     .on_part_complete(|part| {
//!         println!("part {}/{}: bytes {}", part.number, part.total, part.range);
//!     })
//!     .build();
//! ```

use super::{
    config::DownloaderConfig,
    downloader::Downloader,
    state::{PartProgress, State},
};
use crate::{ProgressBarOpts, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc};

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main()  {
/// use partfetch::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().chunks_per_part(8).directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = DownloaderBuilder::default();
        builder.config.style_options =
            StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
        builder
    }

    /// Sets the directory where to store the download.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the maximum size of a sequential part, in bytes.
    ///
    /// Must be greater than zero; checked when the download starts.
    pub fn part_size_bytes(mut self, part_size_bytes: u64) -> Self {
        self.config.part_size_bytes = part_size_bytes;
        self
    }

    /// Set the number of sub-ranges fetched concurrently within a part.
    ///
    /// Must be greater than zero; checked when the download starts.
    pub fn chunks_per_part(mut self, chunks_per_part: u32) -> Self {
        self.config.chunks_per_part = chunks_per_part;
        self
    }

    /// Set the downloader style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Send every request through `proxy`.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set callback for state transitions.
    ///
    /// ```rust
    /// use partfetch::downloader::{DownloaderBuilder, State};
    ///
    /// let downloader = DownloaderBuilder::new()
    ///     .on_state(|state| {
    ///         if state == State::Failed {
    ///             eprintln!("download failed");
    ///         }
    ///     })
    ///     .build();
    /// ```
    pub fn on_state<F>(mut self, callback: F) -> Self
    where
        F: Fn(State) + Send + Sync + 'static,
    {
        self.config.on_state = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Set callback for when each part has been written.
    pub fn on_part_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PartProgress) + Send + Sync + 'static,
    {
        self.config.on_part_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one. See also [`header()`].
    ///
    /// [`header()`]: DownloaderBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use partfetch::downloader::DownloaderBuilder;
    ///
    /// let auth = HeaderValue::from_static("Basic aGk6MTIzNDU2Cg==");
    ///
    /// let downloader = DownloaderBuilder::new()
    ///     .header(header::USER_AGENT, HeaderValue::from_static("curl/7.87"))
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
