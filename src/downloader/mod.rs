//! The download orchestrator, its builder and its configuration.
//!
//! - `downloader` - the [`Downloader`] driving one download part by part
//! - `builder` - [`DownloaderBuilder`] for configuring it
//! - `config` - configuration structure, defaults and callback types
//! - `state` - lifecycle [`State`]s and [`PartProgress`] reports
//!
//! # Examples
//!
//! ```rust
//! use partfetch::downloader::{DownloaderBuilder, State};
//!
//! let downloader = DownloaderBuilder::hidden()
//!     .part_size_bytes(1024 * 1024)
//!     .chunks_per_part(4)
//!     .on_state(|state| {
//!         if state.is_terminal() {
//!             println!("finished: {}", state);
//!         }
//!     })
//!     .build();
//! assert_eq!(downloader.chunks_per_part(), 4);
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod state;

pub use builder::DownloaderBuilder;
pub use config::{
    DownloaderConfig, PartCallback, StateCallback, DEFAULT_CHUNKS_PER_PART, DEFAULT_PART_SIZE,
};
pub use downloader::Downloader;
pub use state::{PartProgress, State};
