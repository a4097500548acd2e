//! Download lifecycle states and per-part progress reports.

use crate::range::ByteRange;
use std::fmt;

/// States a download goes through.
///
/// `Init → ResolvingInfo → Validating → DownloadingParts → Done`, with
/// `Failed` reachable from every state that is not terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Configuration is being checked.
    Init,
    /// The metadata probe is in flight.
    ResolvingInfo,
    /// Length and range support are being checked.
    Validating,
    /// Parts are being fetched and written.
    DownloadingParts,
    /// Every part has been written.
    Done,
    /// The download stopped on an error.
    Failed,
}

impl State {
    /// Whether no further transition can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Done | State::Failed)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Init => "init",
            State::ResolvingInfo => "resolving-info",
            State::Validating => "validating",
            State::DownloadingParts => "downloading-parts",
            State::Done => "done",
            State::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Reported once a part has been fetched and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartProgress {
    /// 1-based number of the part.
    pub number: u64,
    /// Number of parts the file was expected to need.
    pub total: u64,
    /// Absolute byte window of the part.
    pub range: ByteRange,
    /// Payload bytes written for the part.
    pub bytes: u64,
}
