//! Waypost Test
//!
//! Testing support for waypost routers without a browser.
//!
//! - [`HeadlessBrowser`]: session history, title, focus and click dispatch
//!   over an in-memory page
//! - [`MockTransport`]: view sources that can fail or be held back with a
//!   [`Gate`]
//! - [`StubEngine`]: `{{ title }}` substitution only
//! - [`RecordingSink`]: collected diagnostics
//! - [`Harness`]: all of the above plus a `LocalPool` to drive loads
//! - [`capture_logs`]: `tracing` capture for log assertions
//!
//! rstest fixtures ([`home_about_routes`], [`home_about_harness`]) provide
//! the two-page site most router tests start from.

#![warn(missing_docs)]

pub mod browser;
pub mod diagnostics;
pub mod engine;
pub mod harness;
pub mod logs;
pub mod transport;

pub use browser::{ClickOutcome, FocusedElement, HeadlessBrowser, HeadlessContainer, HistoryEntry};
pub use diagnostics::RecordingSink;
pub use engine::StubEngine;
pub use harness::{Harness, TEST_ORIGIN, home_about_harness, home_about_routes};
pub use logs::{CapturedEvent, CapturedLogs, capture_logs};
pub use transport::{Gate, MockTransport};
