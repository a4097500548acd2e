//! Download targets and their results.
//!
//! - [`download`] - the [`Download`] struct and URL handling
//! - [`summary`] - what a completed download reports back

pub mod download;
pub mod summary;

pub use download::Download;
pub use summary::Summary;
