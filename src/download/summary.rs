//! Outcome of a completed download.

use super::download::Download;
use std::path::{Path, PathBuf};

/// Represents a finished [`Download`].
///
/// A summary only exists for a download that completed; failures are
/// reported as an [`Error`](crate::Error) instead, with no partial result.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// Where the file was written.
    path: PathBuf,
    /// Size of the written file in bytes.
    size: u64,
    /// Number of sequential parts that were fetched.
    parts: u64,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(download: Download, path: PathBuf, size: u64, parts: u64) -> Self {
        Self {
            download,
            path,
            size,
            parts,
        }
    }

    /// Get a reference to the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get the path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the size of the file on disk.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the number of parts.
    pub fn parts(&self) -> u64 {
        self.parts
    }
}
