//! Download targets.
//!
//! A [`Download`] names the remote file and the name it is saved under.
//!
//! ```rust
//! use partfetch::download::Download;
//! use std::convert::TryFrom;
//!
//! // The file name is taken from the last path segment.
//! let download = Download::try_from("https://example.com/files/report%20v2.pdf")?;
//! assert_eq!(download.filename, "report v2.pdf");
//!
//! // Or chosen explicitly.
//! let url = reqwest::Url::parse("https://example.com/download?id=7")?;
//! let download = Download::new(&url, "data.bin");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Error;

use percent_encoding::percent_decode_str;
use reqwest::Url;
use std::convert::TryFrom;

/// Represents the file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the file to download.
    pub url: Url,
    /// File name used to save the file on disk.
    pub filename: String,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using the [`Download::try_from`] method, the file name is
    /// automatically extracted from the URL.
    pub fn new(url: &Url, filename: &str) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
        }
    }
}

impl TryFrom<&Url> for Download {
    type Error = crate::error::Error;

    /// Takes the file name from the last path segment of `value`.
    ///
    /// The segment is percent-decoded as is, `+` and `=` keep their literal
    /// meaning. A name that is empty, `.`, `..`, or that decodes to
    /// something containing a path separator is rejected, so the file can
    /// never land outside the download directory.
    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        let segment = value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .unwrap_or_default();

        let filename = percent_decode_str(segment)
            .decode_utf8()
            .map_err(|e| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" has a filename that is not UTF-8: {}",
                    value, e
                ))
            })?
            .into_owned();
        if filename.is_empty() {
            return Err(Error::InvalidUrl(format!(
                "The url \"{}\" does not contain a filename",
                value
            )));
        }
        if filename == "." || filename == ".." || filename.contains(['/', '\\']) {
            return Err(Error::InvalidUrl(format!(
                "The url \"{}\" does not name a plain file: {:?}",
                value, filename
            )));
        }

        Ok(Download {
            url: value.clone(),
            filename,
        })
    }
}

impl TryFrom<&str> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Download::try_from(&u))
    }
}
