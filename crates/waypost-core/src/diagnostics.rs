//! Developer-facing diagnostics.
//!
//! Diagnostics report problems the page author should fix (a view without a
//! focusable heading, a view that failed to load). They are never shown to
//! the end user and never interrupt navigation.
//!
//! | Diagnostic | Level | WASM | Non-WASM |
//! |------------|-------|------|----------|
//! | `MissingHeading` | error | `console.error` + `tracing` | `tracing` |
//! | `ViewUnavailable` | warn | `console.warn` + `tracing` | `tracing` |

use std::rc::Rc;
use tracing::{error, warn};

/// A problem detected during a view load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// The rendered page has no element matching the focus heading selector.
	MissingHeading {
		/// Pathname that was rendered.
		pathname: String,
		/// Selector that found nothing.
		selector: String,
	},
	/// A matched route's view could not be fetched or rendered.
	ViewUnavailable {
		/// Pathname that was rendered.
		pathname: String,
		/// View locator.
		view: String,
		/// Failure description.
		reason: String,
	},
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::MissingHeading { pathname, selector } => write!(
				f,
				"for accessibility, the page at {} should always contain an element matching '{}'",
				pathname, selector
			),
			Self::ViewUnavailable {
				pathname,
				view,
				reason,
			} => write!(f, "view {} for {} is unavailable: {}", view, pathname, reason),
		}
	}
}

/// Receives diagnostics.
pub trait DiagnosticSink {
	/// Reports `diagnostic`.
	fn report(&self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Rc<T> {
	fn report(&self, diagnostic: &Diagnostic) {
		(**self).report(diagnostic);
	}
}

/// Default sink: emits `tracing` events, and browser console messages on
/// `wasm32` where no subscriber is usually installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn report(&self, diagnostic: &Diagnostic) {
		match diagnostic {
			Diagnostic::MissingHeading { pathname, selector } => {
				error!(%pathname, %selector, "{}", diagnostic);
				#[cfg(target_arch = "wasm32")]
				web_sys::console::error_1(&diagnostic.to_string().into());
			}
			Diagnostic::ViewUnavailable { pathname, view, .. } => {
				warn!(%pathname, %view, "{}", diagnostic);
				#[cfg(target_arch = "wasm32")]
				web_sys::console::warn_1(&diagnostic.to_string().into());
			}
		}
	}
}
