//! Progress bars for a running download.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Coordinates the parts bar and the bytes bar of the current part.
pub struct ProgressDisplay {
    multi: MultiProgress,
    main: ProgressBar,
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display for a download of `total_parts` parts.
    pub fn new(style_options: StyleOptions, total_parts: u64) -> Self {
        let multi = match style_options.is_enabled() {
            true => MultiProgress::new(),
            false => MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        };
        let main = multi.add(style_options.main().clone().to_progress_bar(total_parts));
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create the bytes bar for a part of `size` bytes.
    pub fn create_child_progress(&self, size: u64) -> ProgressBar {
        self.multi
            .add(self.style_options.child().clone().to_progress_bar(size))
    }

    /// Count one more part as done.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish a part's bar, clearing it or keeping it based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Finish the display after a successful download.
    pub fn finish(self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }

    /// Leave the bars where they stopped after a failed download.
    pub fn abandon(self) {
        self.main.abandon();
    }
}
