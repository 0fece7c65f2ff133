//! # inkboard
//!
//! A rotating two-page home status dashboard for small tri-color e-paper
//! panels, backed by a Home Assistant style REST API.
//!
//! The display process is one-shot: an external scheduler (cron, a systemd
//! timer, or the optional bridge server's `/refresh` endpoint) invokes it
//! repeatedly, and each invocation renders exactly one page:
//!
//! - **Status page**: open doors/windows count, kitchen door last-opened
//!   time, alarm panel state
//! - **Event page**: next calendar event with a relative countdown
//!
//! The only state that survives between invocations is a one-token page
//! index file; everything else is fetched fresh from the backend each run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inkboard::{Config, Driver, PpmSink};
//!
//! # fn example() -> Result<(), inkboard::Error> {
//! let config = Config::from_env()?;
//! let mut sink = PpmSink::new(config.output_path.clone());
//!
//! // Renders one page, pushes the frame, toggles the page index.
//! Driver::new(config).run(&mut sink)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Degradation model
//!
//! A failed entity read never aborts a render: the affected field falls back
//! to a sentinel value and the page still goes out. Only failures in frame
//! delivery or page-index persistence surface as errors, since those leave
//! the panel stale or the next invocation on the wrong page.
//!
//! ## Feature Flags
//!
//! - `bridge` - Companion HTTP server: a JSON feed for a secondary consumer
//!   device and a manual "render now" trigger

pub mod client;
pub mod config;
pub mod driver;
mod error;
pub mod icons;
pub mod page;
pub mod render;
pub mod sink;
pub mod surface;
pub mod views;

#[cfg(feature = "bridge")]
pub mod bridge;

pub use client::{Client, EntityReading};
pub use config::{Config, Entities};
pub use driver::Driver;
pub use error::Error;
pub use icons::Icon;
pub use page::{Page, PageStore};
pub use sink::{DisplaySink, PpmSink};
pub use surface::{Frame, PanelColor};
pub use views::{Countdown, EventView, Severity, StatusView};

/// Panel width in pixels (Inky pHAT class panels)
pub const PANEL_WIDTH: u32 = 250;

/// Panel height in pixels
pub const PANEL_HEIGHT: u32 = 122;

/// Per-request timeout for backend reads, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(PANEL_WIDTH, 250);
        assert_eq!(PANEL_HEIGHT, 122);
        assert_eq!(DEFAULT_TIMEOUT_SECS, 5);
    }
}
