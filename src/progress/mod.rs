//! Progress bars.
//!
//! A download shows a main bar counting parts and, under it, a bar for the
//! bytes of the part being fetched.
//!
//! ```rust
//! use partfetch::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Keep the parts bar, hide the per-part bytes bar.
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::new(
//!         Some(ProgressBarOpts::TEMPLATE_PARTS.to_string()),
//!         None,
//!         true,
//!         false,
//!     ),
//!     ProgressBarOpts::hidden(),
//! );
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
